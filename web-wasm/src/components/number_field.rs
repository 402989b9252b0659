//! 数値入力コンポーネント

use farmguard_common::{FieldValue, NumericField};
use leptos::prelude::*;

/// フォームの項目一覧から数値を取り出す
pub fn number_value(fields: Vec<(&'static str, FieldValue)>, name: &str) -> f64 {
    fields
        .into_iter()
        .find_map(|(n, value)| match value {
            FieldValue::Number(v) if n == name => Some(v),
            _ => None,
        })
        .unwrap_or(0.0)
}

/// 入力欄に表示する文字列
///
/// 入力中の文字列が送信値と同じ数値を表すならそのまま（"6." など）、
/// そうでなければ送信値を表示する。
pub fn display_text(raw: &str, value: f64) -> String {
    let trimmed = raw.trim();
    let typed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    match typed.parse::<f64>() {
        Ok(v) if v == value => raw.to_string(),
        _ => value.to_string(),
    }
}

/// 入力中の文字列はそのまま親に渡す（パースは呼び出し側）
#[component]
pub fn NumberField<F>(field: NumericField, value: Signal<f64>, on_input: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let (raw, set_raw) = signal(value.get_untracked().to_string());

    view! {
        <div class="form-group">
            <label for=field.name>{field.label}</label>
            <input
                type="number"
                id=field.name
                step=field.step.to_string()
                placeholder=field.hint()
                prop:value=move || display_text(&raw.get_untracked(), value.get())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    set_raw.set(text.clone());
                    on_input(text);
                }
            />
            <Show when=move || !field.in_range(value.get())>
                <p class="text-warning">{format!("Recommended range: {}", field.hint())}</p>
            </Show>
        </div>
    }
}
