// 処理に関連するデータ型定義

use std::path::PathBuf;

/// 1回の変換処理のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub total_lines: usize,
    /// 変換後にトークンが一つも残らなかった行数
    pub empty_lines: usize,
    pub total_tokens: usize,
    pub total_processing_time_ms: u64,
}

impl PrepareSummary {
    /// 1行あたりの平均トークン数（空入力なら0.0）
    pub fn average_tokens_per_line(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            self.total_tokens as f64 / self.total_lines as f64
        }
    }
}

/// ストリーム単位の集計（ファイルパスを持たない）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub total_lines: usize,
    pub empty_lines: usize,
    pub total_tokens: usize,
}

impl StreamStats {
    /// 変換済みの1行（トークン数）を集計に加える
    pub fn record(&mut self, token_count: usize) {
        self.total_lines += 1;
        if token_count == 0 {
            self.empty_lines += 1;
        }
        self.total_tokens += token_count;
    }
}
