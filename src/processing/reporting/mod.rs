// 進捗報告
//
// tqdm相当の行数カウント表示をトレイトの裏側に置き、
// コンソール出力・無出力・モックを差し替えられるようにする。

pub mod traits;

// 公開API
pub use traits::*;
