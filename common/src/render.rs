//! 結果表示用のビューモデル
//!
//! CLIとWebで同じ表示内容を使う。欠落したフィールドはここで既定値に置き換える。

use crate::classify::{ConfidenceLevel, DiseaseCategory, FertilizerCategory, Tone};
use crate::types::{CropRecommendation, DetectionResult, FertilizerRecommendation};

pub const DEFAULT_ADVICE: &str = "No specific treatment advice available for this condition. \
Please consult with a local agricultural expert for personalized recommendations.";

/// 病害検出結果と一緒に出すヒント
pub const DETECTION_TIPS: [&str; 4] = [
    "Take photos in good lighting for better accuracy",
    "Include both healthy and affected areas in your photos",
    "Monitor your plants regularly for early detection",
    "Consider preventive measures for future protection",
];

pub const CROP_REASONS: [&str; 4] = [
    "Optimal for your soil conditions",
    "Suitable for your climate",
    "High yield potential",
    "Disease resistance",
];

pub const FERTILIZER_TIPS: [&str; 4] = [
    "Apply fertilizer during active growth",
    "Water thoroughly after application",
    "Monitor plant response",
    "Adjust based on soil test results",
];

/// プログレスバーの最小幅（%）
const MIN_BAR_WIDTH: f64 = 5.0;

/// 結果ページの表示状態
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// 表示する結果がない（エラーではない）
    NoResult { back_path: &'static str },
    Detection(DetectionView),
}

impl ResultView {
    pub fn from_detection(result: Option<DetectionResult>, base_url: &str) -> Self {
        match result {
            Some(result) => ResultView::Detection(DetectionView::new(&result, base_url)),
            None => ResultView::NoResult { back_path: "/" },
        }
    }
}

/// 病害検出結果の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionView {
    /// 大文字・空白区切り ("TOMATO BLIGHT")
    pub label: String,
    pub category: DiseaseCategory,
    /// 0.0〜1.0（欠落時0）
    pub confidence: f64,
    pub level: ConfidenceLevel,
    pub advice: String,
    /// 再表示用の画像URL
    pub image_url: Option<String>,
    pub timestamp: Option<String>,
}

impl DetectionView {
    pub fn new(result: &DetectionResult, base_url: &str) -> Self {
        let confidence = result.confidence().filter(|c| c.is_finite()).unwrap_or(0.0);
        Self {
            label: display_label(result.label()),
            category: DiseaseCategory::classify(result.label()),
            confidence,
            level: ConfidenceLevel::classify(Some(confidence)),
            advice: result
                .advice()
                .filter(|a| !a.is_empty())
                .unwrap_or(DEFAULT_ADVICE)
                .to_string(),
            image_url: result
                .image_url
                .as_deref()
                .and_then(|url| uploads_url(base_url, url)),
            timestamp: result.timestamp.clone(),
        }
    }

    /// "92.0%"
    pub fn confidence_text(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    /// バー幅（%）。最低5%
    pub fn bar_width(&self) -> f64 {
        (self.confidence * 100.0).max(MIN_BAR_WIDTH)
    }

    pub fn bar_tone(&self) -> Tone {
        self.level.tone()
    }
}

/// "tomato_blight" → "TOMATO BLIGHT"
pub fn display_label(label: Option<&str>) -> String {
    match label {
        Some(l) if !l.is_empty() => l.replace('_', " ").to_uppercase(),
        _ => "UNKNOWN".to_string(),
    }
}

/// 返却された image_url の末尾セグメントから `{base}/uploads/{file}` を作る
pub fn uploads_url(base_url: &str, image_url: &str) -> Option<String> {
    let file_name = image_url.rsplit('/').next().filter(|s| !s.is_empty())?;
    Some(format!(
        "{}/uploads/{}",
        base_url.trim_end_matches('/'),
        file_name
    ))
}

/// 作物推薦の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct CropView {
    pub recommendation: String,
}

impl CropView {
    pub fn from_result(result: &CropRecommendation) -> Self {
        Self {
            recommendation: non_empty(&result.recommendation, "Unable to get recommendation"),
        }
    }
}

/// 施肥推薦の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct FertilizerView {
    pub fertilizer: String,
    pub deficiency: String,
    pub application: String,
    pub category: FertilizerCategory,
}

impl FertilizerView {
    pub fn from_result(result: &FertilizerRecommendation) -> Self {
        Self {
            fertilizer: non_empty(&result.fertilizer, "No recommendation"),
            deficiency: non_empty(&result.deficiency, "No deficiency detected"),
            application: non_empty(&result.application, "Follow package instructions"),
            category: FertilizerCategory::classify(result.fertilizer.as_deref()),
        }
    }

    /// 呼び出し失敗時に表示する代替結果
    pub fn failed() -> Self {
        Self::from_result(&FertilizerRecommendation {
            fertilizer: Some("Error getting recommendation".to_string()),
            deficiency: Some("Please try again".to_string()),
            application: Some("Check your connection".to_string()),
        })
    }
}

fn non_empty(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport;
    use crate::types::Diagnosis;

    const BASE: &str = "http://localhost:8000";

    #[test]
    fn test_no_result_view() {
        assert_eq!(
            ResultView::from_detection(None, BASE),
            ResultView::NoResult { back_path: "/" }
        );
    }

    #[test]
    fn test_malformed_payloads_render_no_result() {
        for query in ["", "?data=", "?data=%7B", "?data=null", "?data=%5B%5D", "?foo=bar"] {
            let view = ResultView::from_detection(transport::decode_query(query), BASE);
            assert!(matches!(view, ResultView::NoResult { .. }), "入力: {}", query);
        }
    }

    #[test]
    fn test_detection_view_blight() {
        let result = DetectionResult {
            result: Some(Diagnosis {
                label: Some("tomato_blight".to_string()),
                confidence: Some(0.92),
                advice: Some("Apply fungicide".to_string()),
            }),
            image_url: Some("/uploads/x.jpg".to_string()),
            timestamp: Some("2025-01-01T10:00:00Z".to_string()),
        };

        let view = DetectionView::new(&result, BASE);
        assert_eq!(view.label, "TOMATO BLIGHT");
        assert_eq!(view.category, DiseaseCategory::Blight);
        assert_eq!(view.category.tone(), Tone::Red);
        assert_eq!(view.level, ConfidenceLevel::High);
        assert_eq!(view.bar_tone(), Tone::Green);
        assert_eq!(view.confidence_text(), "92.0%");
        assert!((view.bar_width() - 92.0).abs() < 1e-9);
        assert_eq!(view.image_url.as_deref(), Some("http://localhost:8000/uploads/x.jpg"));
    }

    #[test]
    fn test_detection_view_defaults() {
        let view = DetectionView::new(&DetectionResult::default(), BASE);
        assert_eq!(view.label, "UNKNOWN");
        assert_eq!(view.category, DiseaseCategory::Unknown);
        assert_eq!(view.confidence, 0.0);
        assert_eq!(view.level, ConfidenceLevel::Low);
        assert_eq!(view.confidence_text(), "0.0%");
        assert_eq!(view.bar_width(), 5.0);
        assert_eq!(view.advice, DEFAULT_ADVICE);
        assert_eq!(view.image_url, None);
        assert_eq!(view.timestamp, None);
    }

    #[test]
    fn test_uploads_url() {
        assert_eq!(
            uploads_url("http://api/", "/static/uploads/abc.png").as_deref(),
            Some("http://api/uploads/abc.png")
        );
        assert_eq!(uploads_url(BASE, "plain.jpg").as_deref(), Some("http://localhost:8000/uploads/plain.jpg"));
        assert_eq!(uploads_url(BASE, "/uploads/"), None);
        assert_eq!(uploads_url(BASE, ""), None);
    }

    #[test]
    fn test_crop_view() {
        let view = CropView::from_result(&CropRecommendation {
            recommendation: Some("rice".to_string()),
        });
        assert_eq!(view.recommendation, "rice");

        let view = CropView::from_result(&CropRecommendation::default());
        assert_eq!(view.recommendation, "Unable to get recommendation");
    }

    #[test]
    fn test_fertilizer_view_defaults() {
        let view = FertilizerView::from_result(&FertilizerRecommendation::default());
        assert_eq!(view.fertilizer, "No recommendation");
        assert_eq!(view.deficiency, "No deficiency detected");
        assert_eq!(view.application, "Follow package instructions");
        assert_eq!(view.category, FertilizerCategory::Other);
    }

    #[test]
    fn test_fertilizer_view_failed() {
        let view = FertilizerView::failed();
        assert_eq!(view.fertilizer, "Error getting recommendation");
        assert_eq!(view.deficiency, "Please try again");
        assert_eq!(view.application, "Check your connection");
    }
}
