//! リクエストエンコーダー
//!
//! FormDraft → SubmissionRequest の純粋関数。
//! ネットワーク処理は行わない。

use crate::draft::{CropDraft, FertilizerDraft, ImageDraft, StagedFile};
use crate::error::{Error, Result};
use serde::Serialize;

/// multipartで画像を送るときのフィールド名
pub const FILE_FIELD: &str = "file";

/// 推論APIのエンドポイント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Detect,
    CropRecommend,
    FertilizerRecommend,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Detect => "/detect",
            Endpoint::CropRecommend => "/crop-recommend",
            Endpoint::FertilizerRecommend => "/fertilizer-recommend",
        }
    }

    /// ベースURLと結合したURL
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// 送信ペイロード（生成後は不変）
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionRequest {
    /// `file`フィールド1つのmultipart
    Multipart(StagedFile),
    Json(serde_json::Value),
}

#[derive(Serialize)]
struct CropBody {
    #[serde(rename = "N")]
    n: f64,
    #[serde(rename = "P")]
    p: f64,
    #[serde(rename = "K")]
    k: f64,
    temperature: f64,
    humidity: f64,
    ph: f64,
    rainfall: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FertilizerBody<'a> {
    crop_type: &'a str,
    soil_type: &'a str,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    ph: f64,
}

impl ImageDraft {
    pub fn to_request(&self) -> Result<(Endpoint, SubmissionRequest)> {
        let file = self.staged().ok_or(Error::NoFileStaged)?;
        Ok((Endpoint::Detect, SubmissionRequest::Multipart(file.clone())))
    }
}

impl CropDraft {
    pub fn to_request(&self) -> Result<(Endpoint, SubmissionRequest)> {
        let body = CropBody {
            n: self.n,
            p: self.p,
            k: self.k,
            temperature: self.temperature,
            humidity: self.humidity,
            ph: self.ph,
            rainfall: self.rainfall,
        };
        Ok((Endpoint::CropRecommend, SubmissionRequest::Json(serde_json::to_value(body)?)))
    }
}

impl FertilizerDraft {
    pub fn to_request(&self) -> Result<(Endpoint, SubmissionRequest)> {
        let crop_type = self.crop_type.ok_or(Error::MissingField("cropType"))?;
        let body = FertilizerBody {
            crop_type: crop_type.as_str(),
            soil_type: self.soil_type.as_str(),
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            ph: self.ph,
        };
        Ok((
            Endpoint::FertilizerRecommend,
            SubmissionRequest::Json(serde_json::to_value(body)?),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_url_trims_slash() {
        assert_eq!(Endpoint::Detect.url("http://localhost:8000/"), "http://localhost:8000/detect");
        assert_eq!(
            Endpoint::FertilizerRecommend.url("https://api.example.com"),
            "https://api.example.com/fertilizer-recommend"
        );
    }

    #[test]
    fn test_image_request_requires_file() {
        let err = ImageDraft::new().to_request().unwrap_err();
        assert!(matches!(err, Error::NoFileStaged));
    }

    #[test]
    fn test_image_request_multipart() {
        let mut draft = ImageDraft::new();
        let file = StagedFile::new("leaf.jpg", "image/jpeg", vec![0xFF, 0xD8]);
        draft.stage(file.clone());

        let (endpoint, request) = draft.to_request().unwrap();
        assert_eq!(endpoint, Endpoint::Detect);
        assert_eq!(request, SubmissionRequest::Multipart(file));
    }

    #[test]
    fn test_crop_request_json() {
        let mut draft = CropDraft::new();
        draft.set_field("N", "90").unwrap();
        draft.set_field("P", "42").unwrap();

        let (endpoint, request) = draft.to_request().unwrap();
        assert_eq!(endpoint, Endpoint::CropRecommend);
        assert_eq!(
            request,
            SubmissionRequest::Json(json!({
                "N": 90.0, "P": 42.0, "K": 0.0,
                "temperature": 25.0, "humidity": 60.0, "ph": 6.5, "rainfall": 100.0
            }))
        );
    }

    #[test]
    fn test_fertilizer_request_requires_crop() {
        let err = FertilizerDraft::new().to_request().unwrap_err();
        assert!(matches!(err, Error::MissingField("cropType")));
    }

    #[test]
    fn test_fertilizer_request_json() {
        let mut draft = FertilizerDraft::new();
        draft.set_field("cropType", "Rice").unwrap();
        draft.set_field("soilType", "Clayey").unwrap();
        draft.set_field("nitrogen", "40").unwrap();
        draft.set_field("phosphorus", "20").unwrap();
        draft.set_field("potassium", "30").unwrap();
        draft.set_field("ph", "6.2").unwrap();

        let (endpoint, request) = draft.to_request().unwrap();
        assert_eq!(endpoint, Endpoint::FertilizerRecommend);
        assert_eq!(
            request,
            SubmissionRequest::Json(json!({
                "cropType": "Rice", "soilType": "Clayey",
                "nitrogen": 40.0, "phosphorus": 20.0, "potassium": 30.0, "ph": 6.2
            }))
        );
    }
}
