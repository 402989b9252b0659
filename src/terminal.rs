//! 端末への結果表示

use dialoguer::console::Style;
use farmguard_common::render::{CROP_REASONS, DETECTION_TIPS, FERTILIZER_TIPS};
use farmguard_common::{
    CropView, DetectionView, FertilizerView, NumericField, ResultView, Tone,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_CELLS: usize = 30;

pub fn style(tone: Tone) -> Style {
    let base = Style::new().bold();
    match tone {
        Tone::Green => base.green(),
        Tone::Yellow => base.yellow(),
        Tone::Orange => base.color256(208),
        Tone::Red => base.red(),
        Tone::Purple => base.magenta(),
        Tone::Blue => base.blue(),
        Tone::Gray => base.dim(),
    }
}

/// 送信中の表示
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 幅(%)に応じたバー
pub fn bar(width_percent: f64, tone: Tone) -> String {
    let filled = ((width_percent.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!(
        "{}{}",
        style(tone).apply_to("█".repeat(filled)),
        "░".repeat(BAR_CELLS - filled)
    )
}

/// タイムスタンプをローカル時刻で表示
pub fn format_timestamp(raw: Option<&str>) -> String {
    use chrono::{DateTime, Local, NaiveDateTime};

    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return "Unknown".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string();
    }
    // タイムゾーンなしのISO形式
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

pub fn print_result_view(view: &ResultView) {
    match view {
        ResultView::NoResult { back_path } => {
            println!("⚠️  No Results Found\n");
            println!("No result data found. Please go back and upload an image for disease detection.");
            println!("  → farmguard detect <IMAGE>   ({})", back_path);
        }
        ResultView::Detection(detection) => print_detection(detection),
    }
}

fn print_detection(view: &DetectionView) {
    println!("🌱 Disease Detection Results\n");

    println!("Detected Condition");
    println!("  {}", style(view.category.tone()).apply_to(&view.label));

    println!("AI Confidence Score");
    println!(
        "  {} {}",
        bar(view.bar_width(), view.bar_tone()),
        style(view.level.tone()).apply_to(view.confidence_text())
    );
    println!(
        "  {}",
        style(view.level.tone()).apply_to(format!("{} Confidence", view.level.label()))
    );

    println!("Analysis Time");
    println!("  {}", format_timestamp(view.timestamp.as_deref()));

    println!("\n{} Treatment Advice", view.category.icon());
    println!("  {}", view.advice);

    if let Some(url) = &view.image_url {
        println!("\nAnalyzed Image");
        println!("  {}", url);
    }

    println!("\n💡 Pro Tips");
    for tip in DETECTION_TIPS {
        println!("  • {}", tip);
    }
}

pub fn print_crop(view: &CropView) {
    println!("🌾 Recommended Crop");
    println!("  {}", style(Tone::Green).apply_to(&view.recommendation));
    println!("\n💡 Why This Crop?");
    for reason in CROP_REASONS {
        println!("  • {}", reason);
    }
}

pub fn print_crop_error() {
    println!("🌾 Recommended Crop");
    println!(
        "  {}",
        style(Tone::Red).apply_to("Error getting recommendation. Please try again.")
    );
}

pub fn print_fertilizer(view: &FertilizerView) {
    println!("🌾 Recommended Fertilizer");
    println!("  {}", style(view.category.tone()).apply_to(&view.fertilizer));
    println!("⚠️  Nutrient Deficiency");
    println!("  {}", view.deficiency);
    println!("📋 Application Method");
    println!("  {}", view.application);

    println!("\n💡 Pro Tips");
    for tip in FERTILIZER_TIPS {
        println!("  • {}", tip);
    }
}

/// 推奨範囲外の入力を警告（送信は止めない）
pub fn warn_out_of_range(field: &NumericField, value: f64) {
    if !field.in_range(value) {
        println!(
            "  {} {} = {} is outside the typical range {}",
            style(Tone::Yellow).apply_to("!"),
            field.label,
            value,
            field.hint()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_cells() {
        dialoguer::console::set_colors_enabled(false);
        assert_eq!(bar(100.0, Tone::Green), "█".repeat(BAR_CELLS));
        assert_eq!(bar(5.0, Tone::Red).chars().filter(|c| *c == '█').count(), 2);
        assert_eq!(bar(150.0, Tone::Green).chars().count(), BAR_CELLS);
    }

    #[test]
    fn test_format_timestamp_fallbacks() {
        assert_eq!(format_timestamp(None), "Unknown");
        assert_eq!(format_timestamp(Some("  ")), "Unknown");
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
        assert_eq!(
            format_timestamp(Some("2025-03-04T05:06:07.123456")),
            "2025-03-04 05:06:07"
        );
    }
}
