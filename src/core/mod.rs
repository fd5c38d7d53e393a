// コアレイヤー - エラー定義と結果型
// 他のレイヤーから参照される基本的な型を提供

pub mod error;
pub mod types;

// 公開API
pub use error::{PrepareError, PrepareResult};
pub use types::{PrepareSummary, StreamStats};
