//! 表示用の分類
//!
//! ラベル・信頼度・肥料名から表示カテゴリ（色・アイコン）を決める。
//! いずれも表示のヒントでしかなく、値が無ければ中立カテゴリに落とす。
//! 閾値 0.6 / 0.8 は統計的な意味を持たない。

/// 表示色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Blue,
    Gray,
}

impl Tone {
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Yellow => "yellow",
            Tone::Orange => "orange",
            Tone::Red => "red",
            Tone::Purple => "purple",
            Tone::Blue => "blue",
            Tone::Gray => "gray",
        }
    }

    /// バッジ用CSSクラス
    pub fn badge_class(&self) -> String {
        format!("badge badge-{}", self.name())
    }

    /// プログレスバー用の色
    pub fn hex(&self) -> &'static str {
        match self {
            Tone::Green => "#10b981",
            Tone::Yellow => "#d97706",
            Tone::Orange => "#ea580c",
            Tone::Red => "#dc2626",
            Tone::Purple => "#9333ea",
            Tone::Blue => "#2563eb",
            Tone::Gray => "#4b5563",
        }
    }
}

/// 信頼度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// 欠落時は0として扱う
    pub fn classify(confidence: Option<f64>) -> Self {
        let c = confidence.filter(|c| !c.is_nan()).unwrap_or(0.0);
        if c > 0.8 {
            ConfidenceLevel::High
        } else if c > 0.6 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ConfidenceLevel::High => Tone::Green,
            ConfidenceLevel::Medium => Tone::Yellow,
            ConfidenceLevel::Low => Tone::Red,
        }
    }
}

/// 病害カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiseaseCategory {
    Healthy,
    Blight,
    Rust,
    Mildew,
    Unknown,
}

impl DiseaseCategory {
    /// ラベルから分類（healthyは完全一致、他は部分一致）
    pub fn classify(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return DiseaseCategory::Unknown;
        };
        if label == "healthy" {
            DiseaseCategory::Healthy
        } else if label.contains("blight") {
            DiseaseCategory::Blight
        } else if label.contains("rust") {
            DiseaseCategory::Rust
        } else if label.contains("mildew") {
            DiseaseCategory::Mildew
        } else {
            DiseaseCategory::Unknown
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            DiseaseCategory::Healthy => Tone::Green,
            DiseaseCategory::Blight => Tone::Red,
            DiseaseCategory::Rust => Tone::Orange,
            DiseaseCategory::Mildew => Tone::Purple,
            DiseaseCategory::Unknown => Tone::Gray,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DiseaseCategory::Healthy => "🌱",
            DiseaseCategory::Blight => "🦠",
            DiseaseCategory::Rust => "🟠",
            DiseaseCategory::Mildew => "🍄",
            DiseaseCategory::Unknown => "💡",
        }
    }
}

/// 肥料カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FertilizerCategory {
    Npk,
    Urea,
    Dap,
    Balanced20,
    Balanced28,
    Other,
}

impl FertilizerCategory {
    pub fn classify(fertilizer: Option<&str>) -> Self {
        let Some(name) = fertilizer else {
            return FertilizerCategory::Other;
        };
        if name.contains("NPK") {
            FertilizerCategory::Npk
        } else if name.contains("Urea") {
            FertilizerCategory::Urea
        } else if name.contains("DAP") {
            FertilizerCategory::Dap
        } else if name.contains("20-20") {
            FertilizerCategory::Balanced20
        } else if name.contains("28-28") {
            FertilizerCategory::Balanced28
        } else {
            FertilizerCategory::Other
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            FertilizerCategory::Npk => Tone::Blue,
            FertilizerCategory::Urea => Tone::Green,
            FertilizerCategory::Dap => Tone::Purple,
            FertilizerCategory::Balanced20 => Tone::Orange,
            FertilizerCategory::Balanced28 => Tone::Red,
            FertilizerCategory::Other => Tone::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_levels() {
        assert_eq!(ConfidenceLevel::classify(Some(0.95)), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::classify(Some(0.7)), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::classify(Some(0.4)), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::classify(None), ConfidenceLevel::Low);
    }

    #[test]
    fn test_confidence_thresholds_are_exclusive() {
        assert_eq!(ConfidenceLevel::classify(Some(0.8)), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::classify(Some(0.6)), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::classify(Some(f64::NAN)), ConfidenceLevel::Low);
    }

    #[test]
    fn test_confidence_tone() {
        assert_eq!(ConfidenceLevel::High.tone(), Tone::Green);
        assert_eq!(ConfidenceLevel::Medium.tone(), Tone::Yellow);
        assert_eq!(ConfidenceLevel::Low.tone(), Tone::Red);
        assert_eq!(ConfidenceLevel::High.label(), "High");
    }

    #[test]
    fn test_disease_category() {
        assert_eq!(DiseaseCategory::classify(Some("healthy")), DiseaseCategory::Healthy);
        assert_eq!(DiseaseCategory::classify(Some("tomato_blight")), DiseaseCategory::Blight);
        assert_eq!(DiseaseCategory::classify(Some("wheat_rust")), DiseaseCategory::Rust);
        assert_eq!(DiseaseCategory::classify(Some("powdery_mildew")), DiseaseCategory::Mildew);
        assert_eq!(DiseaseCategory::classify(Some("leaf_spot")), DiseaseCategory::Unknown);
        assert_eq!(DiseaseCategory::classify(None), DiseaseCategory::Unknown);
    }

    #[test]
    fn test_disease_healthy_is_exact_match() {
        assert_eq!(DiseaseCategory::classify(Some("mostly_healthy")), DiseaseCategory::Unknown);
    }

    #[test]
    fn test_disease_tone_and_icon() {
        assert_eq!(DiseaseCategory::Blight.tone(), Tone::Red);
        assert_eq!(DiseaseCategory::Blight.icon(), "🦠");
        assert_eq!(DiseaseCategory::Unknown.tone(), Tone::Gray);
    }

    #[test]
    fn test_fertilizer_category() {
        assert_eq!(FertilizerCategory::classify(Some("NPK 10-26-26")), FertilizerCategory::Npk);
        assert_eq!(FertilizerCategory::classify(Some("Urea")), FertilizerCategory::Urea);
        assert_eq!(FertilizerCategory::classify(Some("DAP")), FertilizerCategory::Dap);
        assert_eq!(FertilizerCategory::classify(Some("20-20")), FertilizerCategory::Balanced20);
        assert_eq!(FertilizerCategory::classify(Some("28-28")), FertilizerCategory::Balanced28);
        assert_eq!(FertilizerCategory::classify(Some("Compost")), FertilizerCategory::Other);
        assert_eq!(FertilizerCategory::classify(None), FertilizerCategory::Other);
    }

    #[test]
    fn test_tone_badge_class() {
        assert_eq!(Tone::Red.badge_class(), "badge badge-red");
        assert_eq!(Tone::Green.hex(), "#10b981");
    }
}
