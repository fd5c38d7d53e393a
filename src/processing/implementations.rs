// 基本具象実装
// 設定と進捗報告のデフォルト実装群

use super::{PrepareConfig, ProgressReporter};
use crate::core::PrepareSummary;
use std::path::Path;

/// デフォルトの進捗報告間隔（行数）
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPrepareConfig {
    enable_progress: bool,
    interval: usize,
}

impl DefaultPrepareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.interval = interval;
        self
    }
}

impl Default for DefaultPrepareConfig {
    fn default() -> Self {
        Self {
            enable_progress: true,
            interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl PrepareConfig for DefaultPrepareConfig {
    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }

    fn progress_interval(&self) -> usize {
        self.interval.max(1)
    }
}

/// コンソール出力による進捗報告実装
#[derive(Debug, Default)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report_started(&self, input: &Path, output: &Path) {
        if !self.quiet {
            println!(
                "🚀 Tokenizing {} -> {}",
                input.display(),
                output.display()
            );
        }
    }

    fn report_progress(&self, lines_done: usize) {
        if !self.quiet {
            println!("📊 Progress: {lines_done} lines");
        }
    }

    fn report_completed(&self, summary: &PrepareSummary) {
        if !self.quiet {
            println!(
                "✅ Completed! Lines: {}, Tokens: {}, Empty lines: {}",
                summary.total_lines, summary.total_tokens, summary.empty_lines
            );
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NoOpProgressReporter {
    fn report_started(&self, _input: &Path, _output: &Path) {
        // 何もしない
    }

    fn report_progress(&self, _lines_done: usize) {
        // 何もしない
    }

    fn report_completed(&self, _summary: &PrepareSummary) {
        // 何もしない
    }
}
