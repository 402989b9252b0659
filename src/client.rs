//! 推論APIクライアント
//!
//! 1回の送信につき1リクエスト。リトライはしない。

use crate::config::Config;
use farmguard_common::{
    CropRecommendation, DetectionResult, Endpoint, FertilizerRecommendation, InvocationError,
    SubmissionRequest, FILE_FIELD,
};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, InvocationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("farmguard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InvocationError::Network(e.to_string()))?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// エンドポイントを呼び出してレスポンスJSONをデコード
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: &SubmissionRequest,
    ) -> Result<T, InvocationError> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(%url, "POST");

        let builder = self.http.post(&url);
        let builder = match request {
            SubmissionRequest::Multipart(file) => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.mime_type)
                    .map_err(|e| InvocationError::Network(e.to_string()))?;
                builder.multipart(Form::new().part(FILE_FIELD, part))
            }
            SubmissionRequest::Json(body) => builder.json(body),
        };

        let response = builder.send().await.map_err(network_error)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "API returned error status");
            return Err(InvocationError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(network_error)?;
        serde_json::from_slice(&bytes).map_err(|e| InvocationError::Decode(e.to_string()))
    }

    pub async fn detect(&self, request: &SubmissionRequest) -> Result<DetectionResult, InvocationError> {
        self.invoke(Endpoint::Detect, request).await
    }

    pub async fn recommend_crop(
        &self,
        request: &SubmissionRequest,
    ) -> Result<CropRecommendation, InvocationError> {
        self.invoke(Endpoint::CropRecommend, request).await
    }

    pub async fn recommend_fertilizer(
        &self,
        request: &SubmissionRequest,
    ) -> Result<FertilizerRecommendation, InvocationError> {
        self.invoke(Endpoint::FertilizerRecommend, request).await
    }

    /// アップロード済み画像を取得 (`GET {base}/uploads/{file}`)
    pub async fn fetch_upload(&self, image_url: &str) -> Result<Vec<u8>, InvocationError> {
        let url = farmguard_common::render::uploads_url(&self.base_url, image_url)
            .ok_or_else(|| InvocationError::Decode(format!("no file name in image_url: {}", image_url)))?;
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url).send().await.map_err(network_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(InvocationError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await.map_err(network_error)?;
        Ok(bytes.to_vec())
    }
}

fn network_error(e: reqwest::Error) -> InvocationError {
    if e.is_decode() {
        InvocationError::Decode(e.to_string())
    } else {
        InvocationError::Network(e.to_string())
    }
}
