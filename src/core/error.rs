// Custom error types for transcript preparation
// 書き起こし変換処理専用のカスタムエラー型定義

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 変換処理固有のエラー型
#[derive(Error, Debug)]
pub enum PrepareError {
    #[error("{} or {} does not exist!", lang_dir.display(), text.display())]
    MissingPath { lang_dir: PathBuf, text: PathBuf },

    #[error("出力先がディレクトリではありません: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("I/Oエラー: {} - {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PrepareError {
    /// パス不在エラーの作成
    pub fn missing_path(lang_dir: impl AsRef<Path>, text: impl AsRef<Path>) -> Self {
        Self::MissingPath {
            lang_dir: lang_dir.as_ref().to_path_buf(),
            text: text.as_ref().to_path_buf(),
        }
    }

    /// ディレクトリ以外が指定された場合のエラーの作成
    pub fn not_a_directory(path: impl AsRef<Path>) -> Self {
        Self::NotADirectory {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// I/Oエラーの作成
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 入力前提条件の違反かどうか（出力ファイルは作られていない）
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingPath { .. } | Self::NotADirectory { .. })
    }
}

/// 変換処理の結果型
pub type PrepareResult<T> = std::result::Result<T, PrepareError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_path_message() {
        let error = PrepareError::missing_path("data/lang_bpe", "data/text.txt");
        assert_eq!(
            error.to_string(),
            "data/lang_bpe or data/text.txt does not exist!"
        );
        assert!(error.is_precondition());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let error = PrepareError::io(
            "out/transcript_chars.txt",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );

        let message = error.to_string();
        assert!(message.contains("out/transcript_chars.txt"));
        assert!(message.contains("disk full"));
        assert!(std::error::Error::source(&error).is_some());
        assert!(!error.is_precondition());
    }

    #[test]
    fn test_not_a_directory_is_precondition() {
        let error = PrepareError::not_a_directory("data/text.txt");
        assert!(error.is_precondition());
        assert!(error.to_string().contains("data/text.txt"));
    }
}
