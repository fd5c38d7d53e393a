use crate::cli::Cli;
use crate::core::PrepareError;
use crate::processing::{
    ConsoleProgressReporter, DefaultPrepareConfig, PrepareConfig, TranscriptEngine,
};
use crate::tokenizer::JaCharTokenizer;
use anyhow::Result;
use std::path::PathBuf;

/// Configuration struct for the prepare command
#[derive(Debug, Clone)]
pub struct PrepareArgs {
    pub lang_dir: PathBuf,
    pub text: PathBuf,
    pub quiet: bool,
}

impl From<Cli> for PrepareArgs {
    fn from(cli: Cli) -> Self {
        Self {
            lang_dir: cli.lang_dir,
            text: cli.text,
            quiet: cli.quiet,
        }
    }
}

/// Tokenize `--text` by Japanese characters into `--lang-dir/transcript_chars.txt`
pub fn execute_prepare(args: PrepareArgs) -> Result<()> {
    let reporter = if args.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };
    let engine = TranscriptEngine::new(
        JaCharTokenizer::new(),
        DefaultPrepareConfig::new().with_progress_reporting(!args.quiet),
        reporter,
    );

    if !args.quiet {
        println!("🔍 BPE学習用テキスト変換開始");
        println!("   - 入力ファイル: {}", args.text.display());
        println!("   - 出力ディレクトリ: {}", args.lang_dir.display());
        if engine.config().enable_progress_reporting() {
            println!(
                "   - 進捗表示間隔: {}行",
                engine.config().progress_interval()
            );
        }
    }

    let summary = engine.process_file(&args.text, &args.lang_dir)?;

    if !args.quiet {
        println!("📊 処理結果:");
        println!("   - 総行数: {}", summary.total_lines);
        println!("   - 空行数: {}", summary.empty_lines);
        println!("   - 総トークン数: {}", summary.total_tokens);
        println!(
            "   - 平均トークン数: {:.2}/行",
            summary.average_tokens_per_line()
        );
        println!("   - 処理時間: {}ms", summary.total_processing_time_ms);
        println!("📄 結果は {} に保存されました", summary.output_path.display());
    }

    Ok(())
}

/// Render a failure for stderr, with a hint when no output was written
pub fn diagnostic(error: &anyhow::Error) -> String {
    let mut message = format!("❌ エラー: {error:#}");
    if let Some(prepare_error) = error.downcast_ref::<PrepareError>() {
        if prepare_error.is_precondition() {
            message.push_str("\n   - --lang-dir と --text が存在することを確認してください");
        }
    }
    message
}
