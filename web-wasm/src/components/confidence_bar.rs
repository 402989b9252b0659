//! 信頼度バーコンポーネント

use farmguard_common::Tone;
use leptos::prelude::*;

/// `width` は0〜100（%）
#[component]
pub fn ConfidenceBar(width: f64, tone: Tone, text: String) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=format!("width: {:.1}%; background-color: {}", width, tone.hex())
                />
            </div>
            <p class="progress-text">{text}</p>
        </div>
    }
}
