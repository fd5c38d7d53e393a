pub mod cli;
pub mod core;
pub mod processing;
pub mod tokenizer;

use processing::{
    ConsoleProgressReporter, DefaultPrepareConfig, NoOpProgressReporter, TranscriptEngine,
};
use tokenizer::JaCharTokenizer;

pub use crate::core::{PrepareError, PrepareResult, PrepareSummary};
pub use tokenizer::tokenize_by_ja_char;

/// コンソールに進捗を表示するエンジン
pub type ConsoleEngine =
    TranscriptEngine<JaCharTokenizer, DefaultPrepareConfig, ConsoleProgressReporter>;

/// 何も表示しないエンジン
pub type QuietEngine =
    TranscriptEngine<JaCharTokenizer, DefaultPrepareConfig, NoOpProgressReporter>;

/// デフォルト設定の変換エンジンを作成（コンソールに進捗を表示）
pub fn create_engine() -> ConsoleEngine {
    TranscriptEngine::new(
        JaCharTokenizer::new(),
        DefaultPrepareConfig::default(),
        ConsoleProgressReporter::new(),
    )
}

/// 静音版の変換エンジンを作成（ライブラリ・テスト用）
pub fn create_quiet_engine() -> QuietEngine {
    TranscriptEngine::new(
        JaCharTokenizer::new(),
        DefaultPrepareConfig::default().with_progress_reporting(false),
        NoOpProgressReporter::new(),
    )
}
