//! 各ページ（検出・作物推薦・施肥ガイド・結果表示）
//!
//! 失敗はページ内で表示し、呼び出し元にはエラーとして返す（終了コード用）

pub mod crop;
pub mod detect;
pub mod fertilizer;
pub mod results;
