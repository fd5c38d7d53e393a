// 変換処理システムのモジュール
// 機能別フォルダ構造によるアーキテクチャ

pub mod config;       // 設定管理
pub mod reporting;    // 進捗報告
pub mod engine;       // 1パス変換エンジン
pub mod lines;        // ユニバーサル改行での行分割
pub mod implementations;

// 公開API - 各機能から再エクスポート
pub use config::PrepareConfig;
pub use reporting::ProgressReporter;
pub use engine::{TranscriptEngine, TRANSCRIPT_CHARS_FILE};
pub use lines::{universal_lines, UniversalLines};
pub use implementations::{
    ConsoleProgressReporter, DefaultPrepareConfig, NoOpProgressReporter,
    DEFAULT_PROGRESS_INTERVAL,
};
