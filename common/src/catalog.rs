//! 入力項目カタログ
//!
//! 作物・土壌の選択肢（閉じた集合）と、数値項目の推奨範囲。
//! 範囲はヒントとしてのみ使い、送信をブロックしない。

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident, $field:literal, [$($variant:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .find(|c| c.as_str() == s)
                    .or_else(|| Self::ALL.iter().find(|c| c.as_str().eq_ignore_ascii_case(s)))
                    .copied()
                    .ok_or_else(|| Error::InvalidChoice {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum!(
    /// 施肥ガイドで選択できる作物（22種）
    CropType,
    "cropType",
    [
        Rice, Maize, Jute, Cotton, Coconut, Papaya, Orange, Apple, Muskmelon, Watermelon,
        Grapes, Mango, Banana, Pomegranate, Lentil, Blackgram, Mungbean, Mothbeans,
        Pigeonpeas, Kidneybeans, Chickpea, Coffee,
    ]
);

choice_enum!(
    /// 土壌区分（5種）
    SoilType,
    "soilType",
    [Sandy, Loamy, Black, Red, Clayey]
);

impl Default for SoilType {
    fn default() -> Self {
        SoilType::Sandy
    }
}

/// 数値入力項目の定義
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericField {
    /// 送信JSONのキー名
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl NumericField {
    const fn new(name: &'static str, label: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self { name, label, min, max, step: 1.0, default }
    }

    const fn fine(self) -> Self {
        Self { step: 0.1, ..self }
    }

    /// 推奨範囲内か（ヒント表示用）
    pub fn in_range(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// プレースホルダ用の範囲文字列 ("0-140")
    pub fn hint(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

/// 作物推薦フォームの数値項目
pub const CROP_FIELDS: [NumericField; 7] = [
    NumericField::new("N", "Nitrogen (N)", 0.0, 140.0, 0.0),
    NumericField::new("P", "Phosphorus (P)", 5.0, 145.0, 0.0),
    NumericField::new("K", "Potassium (K)", 5.0, 205.0, 0.0),
    NumericField::new("temperature", "Temperature (°C)", 8.0, 44.0, 25.0).fine(),
    NumericField::new("humidity", "Humidity (%)", 14.0, 71.0, 60.0),
    NumericField::new("ph", "Soil pH", 3.5, 10.0, 6.5).fine(),
    NumericField::new("rainfall", "Rainfall (mm)", 20.0, 300.0, 100.0),
];

/// 施肥ガイドフォームの数値項目
pub const FERTILIZER_FIELDS: [NumericField; 4] = [
    NumericField::new("nitrogen", "Nitrogen (N)", 0.0, 140.0, 0.0),
    NumericField::new("phosphorus", "Phosphorus (P)", 5.0, 145.0, 0.0),
    NumericField::new("potassium", "Potassium (K)", 5.0, 205.0, 0.0),
    NumericField::new("ph", "Soil pH", 3.5, 10.0, 6.5).fine(),
];

/// 名前から項目定義を引く
pub fn find_field<'a>(fields: &'a [NumericField], name: &str) -> Option<&'a NumericField> {
    fields.iter().find(|f| f.name == name)
}
