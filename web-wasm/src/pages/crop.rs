//! 作物推薦ページ

use crate::api::client::ApiClient;
use crate::components::number_field::{number_value, NumberField};
use farmguard_common::render::CROP_REASONS;
use farmguard_common::{CropDraft, CropRecommendation, CropView, SubmitPhase, CROP_FIELDS};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

const RECOMMEND_ERROR: &str = "Error getting recommendation. Please try again.";

#[component]
pub fn CropPage() -> impl IntoView {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let (draft, set_draft) = signal(CropDraft::new());
    let (phase, set_phase) = signal(SubmitPhase::Idle);
    let (result, set_result) = signal(None::<CropView>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (endpoint, request) = match draft.with(|d| d.to_request()) {
            Ok(r) => r,
            Err(e) => {
                set_phase.update(|p| p.fail(e.to_string()));
                return;
            }
        };
        if !set_phase.try_update(|p| p.begin()).unwrap_or(false) {
            return;
        }

        let client = client.clone();
        spawn_local(async move {
            match client.invoke::<CropRecommendation>(endpoint, &request).await {
                Ok(recommendation) => {
                    set_result.set(Some(CropView::from_result(&recommendation)));
                    set_phase.update(|p| p.succeed());
                }
                Err(e) => {
                    gloo::console::error!(format!("crop recommendation failed: {}", e));
                    set_result.set(None);
                    set_phase.update(|p| p.fail(RECOMMEND_ERROR));
                }
            }
        });
    };

    view! {
        <section class="card">
            <h2>"🌾 Crop Recommendation"</h2>
            <p class="text-muted">
                "Enter your soil and climate data to get AI-powered crop recommendations."
            </p>

            <form class="form-grid" on:submit=on_submit>
                <h3>"Soil & Climate Data"</h3>
                {CROP_FIELDS
                    .iter()
                    .map(|field| {
                        let name = field.name;
                        let value = Signal::derive(move || number_value(draft.with(|d| d.fields()), name));
                        let on_input = move |raw: String| {
                            set_draft.update(|d| {
                                if let Err(e) = d.set_field(name, &raw) {
                                    gloo::console::warn!(e.to_string());
                                }
                            });
                        };
                        view! { <NumberField field=*field value=value on_input=on_input /> }
                    })
                    .collect_view()}

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || phase.with(|p| p.is_busy())
                >
                    {move || if phase.with(|p| p.is_busy()) { "Analyzing..." } else { "Get Recommendation" }}
                </button>
            </form>

            {move || {
                phase
                    .with(|p| p.error().map(str::to_string))
                    .map(|msg| view! { <div class="alert alert-error">{msg}</div> })
            }}

            {move || {
                result.get().map(|crop| view! {
                    <div class="result">
                        <h3>"AI Recommendation"</h3>
                        <div class="recommendation">
                            <h4>"🌾 Recommended Crop"</h4>
                            <p class="badge badge-green">{crop.recommendation}</p>
                        </div>
                        <div class="tips">
                            <h4>"💡 Why This Crop?"</h4>
                            <ul>
                                {CROP_REASONS.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
                            </ul>
                        </div>
                    </div>
                })
            }}
        </section>
    }
}
