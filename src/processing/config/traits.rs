// 設定管理のトレイト定義

/// 変換処理の設定を抽象化するトレイト
pub trait PrepareConfig {
    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;

    /// 何行ごとに進捗を報告するか（0は1として扱う）
    fn progress_interval(&self) -> usize;
}
