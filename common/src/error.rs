//! エラー型定義
//!
//! - Error: 送信前（エンコード段階）で検出されるエラー
//! - InvocationError: リモートAPI呼び出しの失敗

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please select an image first")]
    NoFileStaged,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidChoice { field: &'static str, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// リモートAPI呼び出しエラー
///
/// CLI(reqwest)とWeb(fetch)の双方がこの型に変換する
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvocationError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("could not decode API response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_file() {
        let error = Error::NoFileStaged;
        assert_eq!(format!("{}", error), "Please select an image first");
    }

    #[test]
    fn test_error_display_missing_field() {
        let error = Error::MissingField("cropType");
        assert_eq!(format!("{}", error), "Missing required field: cropType");
    }

    #[test]
    fn test_error_display_invalid_choice() {
        let error = Error::InvalidChoice {
            field: "soilType",
            value: "Gravel".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("soilType"));
        assert!(display.contains("Gravel"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_invocation_error_display() {
        assert_eq!(
            InvocationError::Status(502).to_string(),
            "API returned status 502"
        );
        assert!(InvocationError::Network("connection refused".into())
            .to_string()
            .contains("connection refused"));
    }
}
