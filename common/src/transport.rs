//! 結果の受け渡し（ページ遷移用）
//!
//! 送信ページから結果ページへ、結果をJSON文字列として
//! クエリパラメータ `data` に載せて渡す。
//! 受け取り側では信頼できない入力として扱い、壊れていればNoneにする。

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// クエリパラメータ名
pub const QUERY_KEY: &str = "data";

/// 結果ページのパス
pub const RESULTS_PATH: &str = "/results";

/// 遷移時に一度だけ渡されるシリアライズ済み結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPayload(String);

impl NavigationPayload {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `data=<percent-encoded JSON>`
    pub fn to_query(&self) -> String {
        format!("{}={}", QUERY_KEY, urlencoding::encode(&self.0))
    }

    /// 結果ページへのURL（パス+クエリ）
    pub fn results_url(&self) -> String {
        format!("{}?{}", RESULTS_PATH, self.to_query())
    }

    /// クエリ文字列から `data` を取り出す
    ///
    /// 先頭の `?` と他のパラメータは無視する。
    /// パラメータがない・デコードできない場合はNone
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.trim_start_matches('?');
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == QUERY_KEY)
            .and_then(|(_, value)| {
                // フォーム形式の '+' は空白
                let value = value.replace('+', " ");
                urlencoding::decode(&value).ok().map(|v| Self(v.into_owned()))
            })
    }
}

/// 結果をペイロードに変換
pub fn encode<T: Serialize>(result: &T) -> Result<NavigationPayload> {
    Ok(NavigationPayload(serde_json::to_string(result)?))
}

/// ペイロードを結果に戻す
///
/// 欠落・不正なペイロードはNone（エラーにしない）
pub fn decode<T: DeserializeOwned>(payload: Option<&NavigationPayload>) -> Option<T> {
    let payload = payload?;
    let value: serde_json::Value = serde_json::from_str(payload.as_str()).ok()?;
    // 結果はJSONオブジェクトのみ受け付ける（"null"や数値は結果なし扱い）
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// クエリ文字列から直接デコード
pub fn decode_query<T: DeserializeOwned>(query: &str) -> Option<T> {
    decode(NavigationPayload::from_query(query).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CropRecommendation, DetectionResult, Diagnosis, FertilizerRecommendation};

    fn sample_detection() -> DetectionResult {
        DetectionResult {
            result: Some(Diagnosis {
                label: Some("tomato_blight".to_string()),
                confidence: Some(0.92),
                advice: Some("Remove infected leaves & apply copper fungicide = 100%".to_string()),
            }),
            image_url: Some("/uploads/x.jpg".to_string()),
            timestamp: Some("2025-01-01T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_round_trip_detection() {
        let result = sample_detection();
        let payload = encode(&result).unwrap();
        assert_eq!(decode::<DetectionResult>(Some(&payload)), Some(result));
    }

    #[test]
    fn test_round_trip_partial_and_other_shapes() {
        let partial = DetectionResult {
            result: Some(Diagnosis {
                label: Some("healthy".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let payload = encode(&partial).unwrap();
        assert_eq!(decode(Some(&payload)), Some(partial));

        let crop = CropRecommendation {
            recommendation: Some("ラ イ ス \"quoted\"".to_string()),
        };
        assert_eq!(decode(Some(&encode(&crop).unwrap())), Some(crop));

        let fert = FertilizerRecommendation::default();
        assert_eq!(decode(Some(&encode(&fert).unwrap())), Some(fert));
    }

    #[test]
    fn test_round_trip_through_query() {
        let result = sample_detection();
        let url = encode(&result).unwrap().results_url();
        assert!(url.starts_with("/results?data="));

        let query = url.split_once('?').unwrap().1;
        assert_eq!(decode_query::<DetectionResult>(query), Some(result));
    }

    #[test]
    fn test_decode_missing_payload() {
        assert_eq!(decode::<DetectionResult>(None), None);
        assert_eq!(decode_query::<DetectionResult>(""), None);
        assert_eq!(decode_query::<DetectionResult>("?other=1"), None);
    }

    #[test]
    fn test_decode_malformed_payload() {
        let cases = [
            "",
            "not json",
            "{\"result\":",
            "null",
            "42",
            "[1,2,3]",
            "\"string\"",
            "{\"result\": \"oops\"}",
            "{\"image_url\": 5}",
        ];
        for raw in cases {
            let payload = NavigationPayload::new(raw);
            assert_eq!(decode::<DetectionResult>(Some(&payload)), None, "入力: {}", raw);
        }
    }

    #[test]
    fn test_from_query_ignores_other_params() {
        let payload = NavigationPayload::from_query("?page=2&data=%7B%7D&x=y").unwrap();
        assert_eq!(payload.as_str(), "{}");
    }

    #[test]
    fn test_from_query_plus_and_bad_escape() {
        let payload = NavigationPayload::from_query("data=%7B%22a%22%3A+1%7D").unwrap();
        assert_eq!(payload.as_str(), "{\"a\": 1}");

        // 不正なUTF-8
        assert!(NavigationPayload::from_query("data=%FF%FE").is_none());
    }

    #[test]
    fn test_decode_empty_object_is_default() {
        let result = decode_query::<DetectionResult>("data=%7B%7D");
        assert_eq!(result, Some(DetectionResult::default()));
    }
}
