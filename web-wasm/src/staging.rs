//! 選択ファイルの取り込み
//!
//! FileReaderで読んだData URLからアップロード用のファイルを作る。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use farmguard_common::StagedFile;

/// Data URLからBase64部分を抽出
///
/// `"data:image/jpeg;base64,/9j/4AAQ..."` → `"/9j/4AAQ..."`
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split_once(',').map(|(_, data)| data)
}

/// Data URLからMIMEタイプを抽出（取れなければ "image/jpeg"）
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .strip_prefix("data:")
        .and_then(|s| s.split(';').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("image/jpeg")
}

/// Data URLをデコードしてStagedFileにする
pub fn staged_file_from_data_url(file_name: &str, data_url: &str) -> Option<StagedFile> {
    // 空ファイルは "data:" だけになる
    let encoded = extract_base64_from_data_url(data_url)
        .or_else(|| (data_url == "data:").then_some(""))?;
    let bytes = STANDARD.decode(encoded).ok()?;
    Some(StagedFile::new(
        file_name,
        extract_mime_type_from_data_url(data_url),
        bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base64_from_data_url_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(extract_base64_from_data_url(data_url), Some("/9j/4AAQSkZJRg=="));
    }

    #[test]
    fn test_extract_base64_from_data_url_invalid() {
        assert_eq!(extract_base64_from_data_url("invalid"), None);
    }

    #[test]
    fn test_extract_mime_type() {
        assert_eq!(extract_mime_type_from_data_url("data:image/png;base64,AAAA"), "image/png");
        assert_eq!(extract_mime_type_from_data_url("data:image/webp;base64,AAAA"), "image/webp");
        assert_eq!(extract_mime_type_from_data_url("data:;base64,AAAA"), "image/jpeg");
        assert_eq!(extract_mime_type_from_data_url("invalid"), "image/jpeg");
    }

    #[test]
    fn test_staged_file_from_data_url() {
        // "hello"
        let file = staged_file_from_data_url("leaf.png", "data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(file.file_name, "leaf.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.bytes, b"hello".to_vec());
    }

    #[test]
    fn test_staged_file_from_untyped_data_url() {
        // 種類不明のファイルもそのまま送信対象にする
        let file = staged_file_from_data_url("leaf.heic", "data:;base64,aGVsbG8=").unwrap();
        assert_eq!(file.file_name, "leaf.heic");
        assert_eq!(file.mime_type, "image/jpeg");
        assert_eq!(file.bytes, b"hello".to_vec());

        let file = staged_file_from_data_url(
            "notes.txt",
            "data:application/octet-stream;base64,aGVsbG8=",
        )
        .unwrap();
        assert_eq!(file.mime_type, "application/octet-stream");

        let file = staged_file_from_data_url("empty.jpg", "data:").unwrap();
        assert!(file.bytes.is_empty());
    }

    #[test]
    fn test_staged_file_from_broken_data_url() {
        assert!(staged_file_from_data_url("leaf.png", "data:image/png;base64,%%%").is_none());
        assert!(staged_file_from_data_url("leaf.png", "no comma").is_none());
    }
}
