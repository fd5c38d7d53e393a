// 進捗報告のトレイト定義

use crate::core::PrepareSummary;
use mockall::automock;
use std::path::Path;

/// 進捗報告を抽象化するトレイト
#[automock]
pub trait ProgressReporter {
    /// 処理開始時の報告（入出力ファイルを開いた直後）
    fn report_started(&self, input: &Path, output: &Path);

    /// 進捗状況の報告（書き出し済みの行数）
    fn report_progress(&self, lines_done: usize);

    /// 処理完了時の報告
    fn report_completed(&self, summary: &PrepareSummary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_progress_reporter_trait_object() {
        let mut reporter = MockProgressReporter::new();
        reporter
            .expect_report_started()
            .withf(|input, output| {
                input == Path::new("text.txt") && output.ends_with("transcript_chars.txt")
            })
            .times(1)
            .return_const(());
        reporter
            .expect_report_progress()
            .withf(|lines| *lines == 10)
            .times(1)
            .return_const(());
        reporter
            .expect_report_completed()
            .withf(|summary| summary.total_lines == 10)
            .times(1)
            .return_const(());

        let reporter_ref: &dyn ProgressReporter = &reporter;
        reporter_ref.report_started(
            Path::new("text.txt"),
            Path::new("lang/transcript_chars.txt"),
        );
        reporter_ref.report_progress(10);
        reporter_ref.report_completed(&PrepareSummary {
            input_path: PathBuf::from("text.txt"),
            output_path: PathBuf::from("lang/transcript_chars.txt"),
            total_lines: 10,
            empty_lines: 0,
            total_tokens: 42,
            total_processing_time_ms: 1,
        });
    }
}
