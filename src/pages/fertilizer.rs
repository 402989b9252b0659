//! 施肥ガイドページ

use crate::cli::FertilizerArgs;
use crate::client::ApiClient;
use crate::error::Result;
use crate::terminal;
use dialoguer::{Input, Select};
use farmguard_common::{
    catalog, CropType, Error, FertilizerDraft, FertilizerRecommendation, FertilizerView,
    FieldValue, SoilType, SubmitControl, FERTILIZER_FIELDS,
};

pub fn build_draft(values: &[(&str, Option<&str>)]) -> Result<FertilizerDraft> {
    let mut draft = FertilizerDraft::new();
    for (name, raw) in values {
        if let Some(raw) = raw {
            draft.set_field(name, raw)?;
        }
    }
    Ok(draft)
}

fn prompt_fields(draft: &mut FertilizerDraft) -> Result<()> {
    let crops: Vec<&str> = CropType::ALL.iter().map(|c| c.as_str()).collect();
    let current = draft
        .crop_type
        .and_then(|c| CropType::ALL.iter().position(|x| *x == c))
        .unwrap_or(0);
    let idx = Select::new()
        .with_prompt("Crop Type")
        .items(&crops)
        .default(current)
        .interact()?;
    draft.set_field("cropType", crops[idx])?;

    let soils: Vec<&str> = SoilType::ALL.iter().map(|s| s.as_str()).collect();
    let current = SoilType::ALL
        .iter()
        .position(|s| *s == draft.soil_type)
        .unwrap_or(0);
    let idx = Select::new()
        .with_prompt("Soil Type")
        .items(&soils)
        .default(current)
        .interact()?;
    draft.set_field("soilType", soils[idx])?;

    for (name, value) in draft.fields() {
        let (Some(field), FieldValue::Number(current)) = (catalog::find_field(&FERTILIZER_FIELDS, name), value) else {
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

pub async fn run(client: &ApiClient, args: &FertilizerArgs) -> Result<()> {
    println!("💧 FarmGuard - Fertilizer Recommendation\n");

    let mut draft = build_draft(&args.values())?;
    if args.interactive {
        prompt_fields(&mut draft)?;
    }

    for (name, value) in draft.fields() {
        if let (Some(field), FieldValue::Number(v)) = (catalog::find_field(&FERTILIZER_FIELDS, name), value) {
            terminal::warn_out_of_range(field, v);
        }
    }

    // 作物未選択なら送信しない
    let (endpoint, request) = match draft.to_request() {
        Ok(r) => r,
        Err(e @ Error::MissingField(_)) => {
            println!("✗ Select Crop (--crop-type, see `farmguard fields`)");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let control = SubmitControl::new();
    let spinner = terminal::spinner("Analyzing...");
    let outcome = control
        .submit(|| client.invoke::<FertilizerRecommendation>(endpoint, &request))
        .await;
    spinner.finish_and_clear();

    match outcome {
        Some(Ok(result)) => {
            terminal::print_fertilizer(&FertilizerView::from_result(&result));
            Ok(())
        }
        Some(Err(e)) => {
            tracing::error!(error = %e, "fertilizer recommendation failed");
            terminal::print_fertilizer(&FertilizerView::failed());
            Err(e.into())
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FarmGuardError;

    #[test]
    fn test_build_draft_from_args() {
        let args = FertilizerArgs {
            crop_type: Some("Rice".to_string()),
            soil_type: Some("Clayey".to_string()),
            nitrogen: Some("40".to_string()),
            phosphorus: Some("20".to_string()),
            potassium: Some("30".to_string()),
            ph: Some("6.2".to_string()),
            interactive: false,
        };
        let draft = build_draft(&args.values()).unwrap();
        assert_eq!(draft.crop_type, Some(CropType::Rice));
        assert_eq!(draft.soil_type, SoilType::Clayey);
        assert_eq!(draft.nitrogen, 40.0);
        assert_eq!(draft.ph, 6.2);
    }

    #[test]
    fn test_build_draft_without_crop_is_not_ready() {
        let draft = build_draft(&FertilizerArgs::default().values()).unwrap();
        assert!(!draft.is_ready());
        assert!(matches!(draft.to_request(), Err(Error::MissingField("cropType"))));
    }

    #[test]
    fn test_build_draft_invalid_soil() {
        let err = build_draft(&[("soilType", Some("Gravel"))]).unwrap_err();
        assert!(matches!(
            err,
            FarmGuardError::Common(Error::InvalidChoice { field: "soilType", .. })
        ));
    }
}
