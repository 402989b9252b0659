//! 病害検出ページ
//!
//! 画像を1枚選択 → `/detect` に送信 → 結果ページへ遷移

use crate::client::ApiClient;
use crate::error::{FarmGuardError, Result};
use crate::pages::results;
use crate::terminal;
use farmguard_common::{transport, DetectionResult, ImageDraft, StagedFile, SubmitControl};
use std::path::{Path, PathBuf};

/// 拡張子からMIMEタイプを推定（内容の検証はしない）
pub fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

/// ファイルを読み込んでフォームにセット
pub fn stage_image(draft: &mut ImageDraft, path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(FarmGuardError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    draft.stage(StagedFile::new(file_name, guess_mime_type(path), bytes));
    Ok(())
}

pub async fn run(
    client: &ApiClient,
    image: &Path,
    render: bool,
    save_image: Option<PathBuf>,
) -> Result<()> {
    println!("🌱 FarmGuard - Plant Disease Detection\n");

    let mut draft = ImageDraft::new();
    stage_image(&mut draft, image)?;
    if let Some(file) = draft.staged() {
        println!("✓ {} ({:.2} MB)", file.file_name, file.size_mb());
    }

    let (endpoint, request) = draft.to_request()?;

    let control = SubmitControl::new();
    let spinner = terminal::spinner("Analyzing...");
    let outcome = control
        .submit(|| client.invoke::<DetectionResult>(endpoint, &request))
        .await;
    spinner.finish_and_clear();

    let Some(outcome) = outcome else {
        return Ok(());
    };

    match outcome {
        Ok(result) => {
            tracing::info!(label = ?result.label(), "detection completed");
            let payload = transport::encode(&result)?;
            println!("→ {}\n", payload.results_url());

            if render {
                results::show(client, Some(&payload), save_image.as_deref()).await?;
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "detection failed");
            println!("✗ Error uploading image. Please try again.");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type(Path::new("leaf.JPG")), "image/jpeg");
        assert_eq!(guess_mime_type(Path::new("a/b/leaf.png")), "image/png");
        assert_eq!(guess_mime_type(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(guess_mime_type(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_stage_image_missing_file() {
        let mut draft = ImageDraft::new();
        let err = stage_image(&mut draft, Path::new("/nonexistent/leaf.jpg")).unwrap_err();
        assert!(matches!(err, FarmGuardError::FileNotFound(_)));
        assert!(!draft.is_ready());
    }

    #[test]
    fn test_stage_image_replaces_previous() {
        let dir = tempdir().expect("Failed to create temp dir");
        let first = dir.path().join("first.jpg");
        let second = dir.path().join("second.png");
        std::fs::write(&first, [0xFF, 0xD8, 0xFF]).unwrap();
        std::fs::write(&second, b"not really a png").unwrap();

        let mut draft = ImageDraft::new();
        stage_image(&mut draft, &first).unwrap();
        stage_image(&mut draft, &second).unwrap();

        let staged = draft.staged().unwrap();
        assert_eq!(staged.file_name, "second.png");
        assert_eq!(staged.mime_type, "image/png");
        assert_eq!(staged.bytes, b"not really a png");
    }
}
