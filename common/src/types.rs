//! APIレスポンスの型定義
//!
//! レスポンスは形が保証されないため、全フィールドをOptionで受ける:
//! - DetectionResult: 病害検出 (`/detect`)
//! - CropRecommendation: 作物推薦 (`/crop-recommend`)
//! - FertilizerRecommendation: 施肥推薦 (`/fertilizer-recommend`)

use serde::{Deserialize, Deserializer, Serialize};

/// 病害検出の判定内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnosis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// 0.0〜1.0
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_f64"
    )]
    pub confidence: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

/// 数値・数値文字列のどちらも受け付ける（それ以外はNone）
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

/// 病害検出結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Diagnosis>,

    /// 例: "/uploads/x.jpg"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl DetectionResult {
    pub fn label(&self) -> Option<&str> {
        self.result.as_ref()?.label.as_deref()
    }

    pub fn confidence(&self) -> Option<f64> {
        self.result.as_ref()?.confidence
    }

    pub fn advice(&self) -> Option<&str> {
        self.result.as_ref()?.advice.as_deref()
    }
}

/// 作物推薦結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropRecommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// 施肥推薦結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FertilizerRecommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fertilizer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deficiency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_result_deserialize() {
        let json = r#"{
            "result": {"label": "tomato_blight", "confidence": 0.92, "advice": "Remove leaves"},
            "image_url": "/uploads/x.jpg",
            "timestamp": "2025-01-01T10:00:00Z"
        }"#;

        let result: DetectionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.label(), Some("tomato_blight"));
        assert_eq!(result.confidence(), Some(0.92));
        assert_eq!(result.advice(), Some("Remove leaves"));
        assert_eq!(result.image_url.as_deref(), Some("/uploads/x.jpg"));
    }

    #[test]
    fn test_detection_result_missing_fields() {
        let result: DetectionResult = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert_eq!(result, DetectionResult::default());
        assert_eq!(result.label(), None);
        assert_eq!(result.confidence(), None);
    }

    #[test]
    fn test_detection_result_partial_diagnosis() {
        let json = r#"{"result": {"label": "healthy"}, "extra": 1}"#;
        let result: DetectionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.label(), Some("healthy"));
        assert_eq!(result.confidence(), None);
        assert_eq!(result.advice(), None);
    }

    #[test]
    fn test_confidence_accepts_numeric_string() {
        let json = r#"{"result": {"confidence": "0.75"}}"#;
        let result: DetectionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.confidence(), Some(0.75));

        let json = r#"{"result": {"confidence": true}}"#;
        let result: DetectionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.confidence(), None);
    }

    #[test]
    fn test_fertilizer_serialize_skips_none() {
        let rec = FertilizerRecommendation {
            fertilizer: Some("Urea".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&rec).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"fertilizer":"Urea"}"#);
    }

    #[test]
    fn test_crop_recommendation_deserialize() {
        let rec: CropRecommendation =
            serde_json::from_str(r#"{"recommendation": "rice"}"#).expect("デシリアライズ失敗");
        assert_eq!(rec.recommendation.as_deref(), Some("rice"));
    }
}
