// 変換エンジン
// トークナイザー・設定・進捗報告を注入して書き起こしファイルを1パスで変換する

use super::lines::universal_lines;
use super::{PrepareConfig, ProgressReporter};
use crate::core::{PrepareError, PrepareResult, PrepareSummary, StreamStats};
use crate::tokenizer::LineTokenizer;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// `--lang-dir` に書き出される出力ファイル名
pub const TRANSCRIPT_CHARS_FILE: &str = "transcript_chars.txt";

/// 依存性注入による変換エンジン
pub struct TranscriptEngine<T, C, R> {
    tokenizer: T,
    config: C,
    reporter: R,
}

impl<T, C, R> TranscriptEngine<T, C, R>
where
    T: LineTokenizer,
    C: PrepareConfig,
    R: ProgressReporter,
{
    /// コンストラクタインジェクション
    pub fn new(tokenizer: T, config: C, reporter: R) -> Self {
        Self {
            tokenizer,
            config,
            reporter,
        }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 出力ディレクトリ内の出力ファイルパス
    pub fn output_path(lang_dir: &Path) -> PathBuf {
        lang_dir.join(TRANSCRIPT_CHARS_FILE)
    }

    /// 書き起こしファイルを変換して `lang_dir/transcript_chars.txt` に書き出す
    ///
    /// どちらかのパスが存在しなければ、ファイルを一切作らずに失敗する。
    /// 途中でI/Oエラーが起きた場合、出力ファイルは書きかけのまま残る。
    pub fn process_file(&self, text: &Path, lang_dir: &Path) -> PrepareResult<PrepareSummary> {
        if !lang_dir.exists() || !text.exists() {
            return Err(PrepareError::missing_path(lang_dir, text));
        }
        if !lang_dir.is_dir() {
            return Err(PrepareError::not_a_directory(lang_dir));
        }

        let start_time = Instant::now();
        let output_path = Self::output_path(lang_dir);

        let input = File::open(text).map_err(|e| PrepareError::io(text, e))?;
        let output = File::create(&output_path).map_err(|e| PrepareError::io(&output_path, e))?;

        self.reporter.report_started(text, &output_path);

        let stats = self.run_stream(
            BufReader::new(input),
            BufWriter::new(output),
            text,
            &output_path,
        )?;

        let summary = PrepareSummary {
            input_path: text.to_path_buf(),
            output_path,
            total_lines: stats.total_lines,
            empty_lines: stats.empty_lines,
            total_tokens: stats.total_tokens,
            total_processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        self.reporter.report_completed(&summary);
        Ok(summary)
    }

    /// 任意の入出力ストリームに対して同じ変換を行う
    pub fn process_stream<In, Out>(&self, reader: In, writer: Out) -> PrepareResult<StreamStats>
    where
        In: BufRead,
        Out: Write,
    {
        self.run_stream(reader, writer, Path::new("<input>"), Path::new("<output>"))
    }

    fn run_stream<In, Out>(
        &self,
        reader: In,
        mut writer: Out,
        input_path: &Path,
        output_path: &Path,
    ) -> PrepareResult<StreamStats>
    where
        In: BufRead,
        Out: Write,
    {
        let mut stats = StreamStats::default();
        let interval = self.config.progress_interval().max(1);
        let report_progress = self.config.enable_progress_reporting();

        for line in universal_lines(reader) {
            let line = line.map_err(|e| PrepareError::io(input_path, e))?;
            let tokens = self.tokenizer.tokens(&line);

            writeln!(writer, "{}", tokens.join(" "))
                .map_err(|e| PrepareError::io(output_path, e))?;
            stats.record(tokens.len());

            if report_progress && stats.total_lines % interval == 0 {
                self.reporter.report_progress(stats.total_lines);
            }
        }

        writer
            .flush()
            .map_err(|e| PrepareError::io(output_path, e))?;
        Ok(stats)
    }
}
