//! 作物推薦ページ

use crate::cli::CropArgs;
use crate::client::ApiClient;
use crate::error::Result;
use crate::terminal;
use dialoguer::Input;
use farmguard_common::{
    catalog, CropDraft, CropRecommendation, CropView, FieldValue, SubmitControl, CROP_FIELDS,
};

/// 引数（テキスト）からフォームを組み立てる
pub fn build_draft(values: &[(&str, Option<&str>)]) -> Result<CropDraft> {
    let mut draft = CropDraft::new();
    for (name, raw) in values {
        if let Some(raw) = raw {
            draft.set_field(name, raw)?;
        }
    }
    Ok(draft)
}

fn prompt_fields(draft: &mut CropDraft) -> Result<()> {
    for (name, value) in draft.fields() {
        let Some(field) = catalog::find_field(&CROP_FIELDS, name) else {
            continue;
        };
        let FieldValue::Number(current) = value else {
            continue;
        };
        let raw: String = Input::new()
            .with_prompt(format!("{} [{}]", field.label, field.hint()))
            .default(current.to_string())
            .interact_text()?;
        draft.set_field(name, &raw)?;
    }
    Ok(())
}

pub async fn run(client: &ApiClient, args: &CropArgs) -> Result<()> {
    println!("🌾 FarmGuard - Crop Recommendation\n");

    let mut draft = build_draft(&args.values())?;
    if args.interactive {
        prompt_fields(&mut draft)?;
    }

    for (name, value) in draft.fields() {
        if let (Some(field), FieldValue::Number(v)) = (catalog::find_field(&CROP_FIELDS, name), value) {
            terminal::warn_out_of_range(field, v);
        }
    }

    let (endpoint, request) = draft.to_request()?;

    let control = SubmitControl::new();
    let spinner = terminal::spinner("Analyzing...");
    let outcome = control
        .submit(|| client.invoke::<CropRecommendation>(endpoint, &request))
        .await;
    spinner.finish_and_clear();

    match outcome {
        Some(Ok(result)) => {
            terminal::print_crop(&CropView::from_result(&result));
            Ok(())
        }
        Some(Err(e)) => {
            tracing::error!(error = %e, "crop recommendation failed");
            terminal::print_crop_error();
            Err(e.into())
        }
        None => Ok(()),
    }
}
