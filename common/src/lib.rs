//! FarmGuard Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ:
//! 入力フォーム → リクエスト生成 → (API呼び出し) → 結果受け渡し → 表示

pub mod catalog;
pub mod classify;
pub mod draft;
pub mod error;
pub mod render;
pub mod request;
pub mod submit;
pub mod transport;
pub mod types;

pub use catalog::{CropType, NumericField, SoilType, CROP_FIELDS, FERTILIZER_FIELDS};
pub use classify::{ConfidenceLevel, DiseaseCategory, FertilizerCategory, Tone};
pub use draft::{parse_numeric, CropDraft, FertilizerDraft, FieldValue, ImageDraft, StagedFile};
pub use error::{Error, InvocationError, Result};
pub use render::{CropView, DetectionView, FertilizerView, ResultView};
pub use request::{Endpoint, SubmissionRequest, FILE_FIELD};
pub use submit::{SubmitControl, SubmitPhase};
pub use transport::NavigationPayload;
pub use types::{CropRecommendation, DetectionResult, Diagnosis, FertilizerRecommendation};

/// APIベースURLの既定値
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
