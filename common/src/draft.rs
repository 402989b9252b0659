//! 入力フォームの下書き（FormDraft）
//!
//! 各ページのフォーム状態をメモリ上に保持する。
//! 数値項目は常に値を持ち、未定義にはならない。

use crate::catalog::{CropType, NumericField, SoilType, CROP_FIELDS, FERTILIZER_FIELDS};
use crate::error::{Error, Result};

/// アップロード対象のファイル
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl StagedFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// サイズ（MB, 小数2桁表示用）
    pub fn size_mb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0 / 1024.0
    }
}

/// 項目値（表示用の汎用ビュー）
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Choice(String),
    File(StagedFile),
}

/// 数値入力をパース
///
/// 先頭の数値リテラルだけを読む（"12abc" → 12）。
/// 読めない場合・非有限値は0にする。
///
/// # Examples
/// ```
/// use farmguard_common::parse_numeric;
///
/// assert_eq!(parse_numeric("6.5"), 6.5);
/// assert_eq!(parse_numeric("abc"), 0.0);
/// ```
pub fn parse_numeric(raw: &str) -> f64 {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;
    let mut valid_end = 0;

    while end < bytes.len() {
        let b = bytes[end];
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                valid_end = end + 1;
            }
            b'+' | b'-' if end == 0 => {}
            b'+' | b'-' if seen_exp && matches!(bytes[end - 1], b'e' | b'E') => {}
            b'.' if !seen_dot && !seen_exp => seen_dot = true,
            b'e' | b'E' if seen_digit && !seen_exp => seen_exp = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return 0.0;
    }

    match s[..valid_end].parse::<f64>() {
        // -0 も 0 として送る
        Ok(v) if v == 0.0 => 0.0,
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn set_numeric(fields: &[NumericField], name: &str, raw: &str) -> Result<f64> {
    fields
        .iter()
        .find(|f| f.name == name)
        .map(|_| parse_numeric(raw))
        .ok_or_else(|| Error::UnknownField(name.to_string()))
}

/// 画像アップロードフォーム
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageDraft {
    file: Option<StagedFile>,
}

impl ImageDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルを選択（既存のファイルは置き換え）
    pub fn stage(&mut self, file: StagedFile) {
        self.file = Some(file);
    }

    pub fn clear(&mut self) {
        self.file = None;
    }

    pub fn staged(&self) -> Option<&StagedFile> {
        self.file.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.file.is_some()
    }

    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        self.file
            .iter()
            .map(|f| ("file", FieldValue::File(f.clone())))
            .collect()
    }
}

/// 作物推薦フォーム
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropDraft {
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl Default for CropDraft {
    fn default() -> Self {
        let d = |i: usize| CROP_FIELDS[i].default;
        Self {
            n: d(0),
            p: d(1),
            k: d(2),
            temperature: d(3),
            humidity: d(4),
            ph: d(5),
            rainfall: d(6),
        }
    }
}

impl CropDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// 項目を1つ更新
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<()> {
        let value = set_numeric(&CROP_FIELDS, name, raw)?;
        *self.slot(name)? = value;
        Ok(())
    }

    fn slot(&mut self, name: &str) -> Result<&mut f64> {
        Ok(match name {
            "N" => &mut self.n,
            "P" => &mut self.p,
            "K" => &mut self.k,
            "temperature" => &mut self.temperature,
            "humidity" => &mut self.humidity,
            "ph" => &mut self.ph,
            "rainfall" => &mut self.rainfall,
            _ => return Err(Error::UnknownField(name.to_string())),
        })
    }

    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let values = [self.n, self.p, self.k, self.temperature, self.humidity, self.ph, self.rainfall];
        CROP_FIELDS
            .iter()
            .zip(values)
            .map(|(f, v)| (f.name, FieldValue::Number(v)))
            .collect()
    }
}

/// 施肥ガイドフォーム
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FertilizerDraft {
    /// 未選択の場合はNone（送信不可）
    pub crop_type: Option<CropType>,
    pub soil_type: SoilType,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
}

impl Default for FertilizerDraft {
    fn default() -> Self {
        let d = |i: usize| FERTILIZER_FIELDS[i].default;
        Self {
            crop_type: None,
            soil_type: SoilType::default(),
            nitrogen: d(0),
            phosphorus: d(1),
            potassium: d(2),
            ph: d(3),
        }
    }
}

impl FertilizerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// 項目を1つ更新
    ///
    /// cropTypeに空文字を渡すと未選択に戻る
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<()> {
        match name {
            "cropType" if raw.trim().is_empty() => self.crop_type = None,
            "cropType" => self.crop_type = Some(raw.parse()?),
            "soilType" => self.soil_type = raw.parse()?,
            _ => {
                let value = set_numeric(&FERTILIZER_FIELDS, name, raw)?;
                match name {
                    "nitrogen" => self.nitrogen = value,
                    "phosphorus" => self.phosphorus = value,
                    "potassium" => self.potassium = value,
                    "ph" => self.ph = value,
                    _ => return Err(Error::UnknownField(name.to_string())),
                }
            }
        }
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.crop_type.is_some()
    }

    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = vec![
            (
                "cropType",
                FieldValue::Choice(self.crop_type.map(|c| c.to_string()).unwrap_or_default()),
            ),
            ("soilType", FieldValue::Choice(self.soil_type.to_string())),
        ];
        let values = [self.nitrogen, self.phosphorus, self.potassium, self.ph];
        fields.extend(
            FERTILIZER_FIELDS
                .iter()
                .zip(values)
                .map(|(f, v)| (f.name, FieldValue::Number(v))),
        );
        fields
    }
}
