//! 結果ページ
//!
//! 遷移時のペイロードを一度だけ読み、表示する。
//! ペイロードが無い・壊れている場合は「結果なし」を表示する（エラーにしない）。

use crate::client::ApiClient;
use crate::error::Result;
use crate::terminal;
use farmguard_common::{transport, DetectionResult, NavigationPayload, ResultView};
use std::path::Path;

/// コマンド引数からペイロードを決める（`--data` 優先）
pub fn payload_from_args(query: Option<&str>, data: Option<&str>) -> Option<NavigationPayload> {
    match data {
        Some(raw) => Some(NavigationPayload::new(raw)),
        None => query.and_then(NavigationPayload::from_query),
    }
}

pub async fn show(
    client: &ApiClient,
    payload: Option<&NavigationPayload>,
    save_image: Option<&Path>,
) -> Result<()> {
    let result: Option<DetectionResult> = transport::decode(payload);
    if payload.is_some() && result.is_none() {
        tracing::warn!("navigation payload could not be decoded; showing empty state");
    }

    let image_url = result.as_ref().and_then(|r| r.image_url.clone());
    let view = ResultView::from_detection(result, client.base_url());
    terminal::print_result_view(&view);

    if let (Some(path), Some(image_url)) = (save_image, image_url) {
        let bytes = client.fetch_upload(&image_url).await?;
        std::fs::write(path, bytes)?;
        println!("\n✓ Image saved: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_from_args_prefers_data() {
        let payload = payload_from_args(Some("?data=%7B%7D"), Some("{\"a\":1}")).unwrap();
        assert_eq!(payload.as_str(), "{\"a\":1}");
    }

    #[test]
    fn test_payload_from_args_query() {
        let payload = payload_from_args(Some("?data=%7B%7D"), None).unwrap();
        assert_eq!(payload.as_str(), "{}");
    }

    #[test]
    fn test_payload_from_args_missing() {
        assert!(payload_from_args(None, None).is_none());
        assert!(payload_from_args(Some("?other=1"), None).is_none());
    }
}
