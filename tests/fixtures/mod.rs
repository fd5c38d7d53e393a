// テストユーティリティ
// 一時ディレクトリに入力書き起こしと出力ディレクトリを用意する
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 変換テスト用のワークスペース
pub struct TranscriptFixture {
    // drop時に削除されるので保持しておく
    pub temp_dir: TempDir,
    pub text: PathBuf,
    pub lang_dir: PathBuf,
}

impl TranscriptFixture {
    /// 入力ファイルと空の出力ディレクトリを作成
    pub fn new(content: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let text = temp_dir.path().join("text");
        let lang_dir = temp_dir.path().join("lang_bpe_500");
        fs::write(&text, content).unwrap();
        fs::create_dir(&lang_dir).unwrap();

        Self {
            temp_dir,
            text,
            lang_dir,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.lang_dir.join("transcript_chars.txt")
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).unwrap()
    }
}

/// ReazonSpeech + GigaSpeech 風の混在コーパス
pub const MIXED_CORPUS: &str = "\
こんにちは世界は hello world の日本語
今日はいい天気ですね

  THE QUICK brown fox  
カタカナとひらがなと漢字
it's a test of 日本語 and English
";
