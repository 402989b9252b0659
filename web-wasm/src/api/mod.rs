//! 推論API呼び出し

pub mod client;
