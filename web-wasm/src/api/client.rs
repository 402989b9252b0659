//! fetch APIによる推論API呼び出し
//!
//! 1回の送信につき1リクエスト。リトライ・タイムアウト設定はしない（ブラウザ既定）。

use farmguard_common::{
    Endpoint, InvocationError, StagedFile, SubmissionRequest, DEFAULT_API_URL, FILE_FIELD,
};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

/// ビルド時に `FARMGUARD_API_URL` で上書きできる
const BUILD_API_URL: Option<&str> = option_env!("FARMGUARD_API_URL");

/// 起動時に一度だけ作り、contextで各ページに渡す
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(BUILD_API_URL.unwrap_or(DEFAULT_API_URL))
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self {
            base_url: base_url.to_string(),
        }
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

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);

        let is_json = match request {
            SubmissionRequest::Multipart(file) => {
                let form = multipart_body(file).map_err(network_error)?;
                opts.set_body(&form);
                false
            }
            SubmissionRequest::Json(body) => {
                let text = serde_json::to_string(body)
                    .map_err(|e| InvocationError::Network(e.to_string()))?;
                opts.set_body(&JsValue::from_str(&text));
                true
            }
        };

        let request = Request::new_with_str_and_init(&url, &opts).map_err(network_error)?;
        if is_json {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(network_error)?;
        }

        let window = web_sys::window()
            .ok_or_else(|| InvocationError::Network("window is not available".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let resp: Response = resp_value.dyn_into().map_err(network_error)?;

        if !resp.ok() {
            gloo::console::warn!(format!("{} returned {}", url, resp.status()));
            return Err(InvocationError::Status(resp.status()));
        }

        let json = JsFuture::from(resp.json().map_err(decode_error)?)
            .await
            .map_err(decode_error)?;
        serde_wasm_bindgen::from_value(json).map_err(|e| InvocationError::Decode(e.to_string()))
    }
}

/// `file` フィールド1つのFormData
fn multipart_body(file: &StagedFile) -> Result<FormData, JsValue> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);

    let options = BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, &blob, &file.file_name)?;
    Ok(form)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(value: JsValue) -> InvocationError {
    InvocationError::Network(describe(&value))
}

fn decode_error(value: JsValue) -> InvocationError {
    InvocationError::Decode(describe(&value))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_multipart_body_has_single_file_field() {
        let file = StagedFile::new("leaf.png", "image/png", vec![1, 2, 3]);
        let form = multipart_body(&file).expect("FormData生成失敗");

        let entry: web_sys::File = form.get(FILE_FIELD).dyn_into().expect("Fileではない");
        assert_eq!(entry.name(), "leaf.png");
        assert_eq!(entry.type_(), "image/png");
        assert_eq!(entry.size(), 3.0);
    }
}
