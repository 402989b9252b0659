//! 結果ページ
//!
//! `?data=` を一度だけ読む。無い・壊れている場合は「結果なし」を表示する。

use crate::api::client::ApiClient;
use crate::components::confidence_bar::ConfidenceBar;
use farmguard_common::render::DETECTION_TIPS;
use farmguard_common::{transport, DetectionResult, DetectionView, ResultView};
use leptos::prelude::*;

#[component]
pub fn ResultsPage(query: String) -> impl IntoView {
    let client = use_context::<ApiClient>().unwrap_or_default();

    let result: Option<DetectionResult> = transport::decode_query(&query);
    if result.is_none() && !query.is_empty() {
        gloo::console::warn!("navigation payload could not be decoded");
    }

    match ResultView::from_detection(result, client.base_url()) {
        ResultView::NoResult { back_path } => view! {
            <section class="card empty-state">
                <h2>"No Results Found"</h2>
                <a href=back_path class="btn btn-primary">"Go back"</a>
            </section>
        }
        .into_any(),
        ResultView::Detection(detection) => view! { <DetectionCard detection=detection /> }.into_any(),
    }
}

#[component]
fn DetectionCard(detection: DetectionView) -> impl IntoView {
    let tone = detection.category.tone();
    let bar_text = format!("{} ({})", detection.confidence_text(), detection.level.label());

    view! {
        <section class="card result">
            <h2>"Disease Detection Results"</h2>
            <p class="text-muted">"AI analysis completed successfully"</p>

            {detection.image_url.clone().map(|src| view! {
                <div class="analyzed-image">
                    <h3>"Analyzed Image"</h3>
                    <img src=src alt="Analyzed plant" />
                </div>
            })}

            <div class="diagnosis">
                <span class=tone.badge_class()>
                    {format!("{} {}", detection.category.icon(), detection.label)}
                </span>
                <ConfidenceBar width=detection.bar_width() tone=detection.bar_tone() text=bar_text />
                {detection.timestamp.clone().map(|ts| view! { <p class="text-muted">{ts}</p> })}
            </div>

            <div class="advice">
                <h3>"Treatment Advice"</h3>
                <p>{detection.advice.clone()}</p>
            </div>

            <div class="tips">
                <h3>"💡 Pro Tips"</h3>
                <ul>
                    {DETECTION_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                </ul>
            </div>

            <a href="/" class="btn btn-secondary">"Analyze another image"</a>
        </section>
    }
}
