//! 施肥ガイドページ
//!
//! 呼び出しに失敗した場合は代替の結果カードを表示する。

use crate::api::client::ApiClient;
use crate::components::number_field::{number_value, NumberField};
use farmguard_common::render::FERTILIZER_TIPS;
use farmguard_common::{
    CropType, FertilizerDraft, FertilizerRecommendation, FertilizerView, SoilType, SubmitPhase,
    FERTILIZER_FIELDS,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn FertilizerPage() -> impl IntoView {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let (draft, set_draft) = signal(FertilizerDraft::new());
    let (phase, set_phase) = signal(SubmitPhase::Idle);
    let (result, set_result) = signal(None::<FertilizerView>);

    let set_choice = move |name: &'static str, raw: String| {
        set_draft.update(|d| {
            if let Err(e) = d.set_field(name, &raw) {
                gloo::console::warn!(e.to_string());
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // 作物未選択なら送信しない
        let (endpoint, request) = match draft.with(|d| d.to_request()) {
            Ok(r) => r,
            Err(e) => {
                set_result.set(None);
                set_phase.update(|p| p.fail(e.to_string()));
                return;
            }
        };
        if !set_phase.try_update(|p| p.begin()).unwrap_or(false) {
            return;
        }

        let client = client.clone();
        spawn_local(async move {
            match client.invoke::<FertilizerRecommendation>(endpoint, &request).await {
                Ok(recommendation) => {
                    set_result.set(Some(FertilizerView::from_result(&recommendation)));
                    set_phase.update(|p| p.succeed());
                }
                Err(e) => {
                    gloo::console::error!(format!("fertilizer recommendation failed: {}", e));
                    set_result.set(Some(FertilizerView::failed()));
                    set_phase.update(|p| p.fail(e.to_string()));
                }
            }
        });
    };

    view! {
        <section class="card">
            <h2>"💧 Fertilizer Guide"</h2>
            <p class="text-muted">
                "Enter your crop and soil data to get personalized fertilizer recommendations."
            </p>

            <form class="form-grid" on:submit=on_submit>
                <h3>"Crop & Soil Information"</h3>

                <div class="form-group">
                    <label for="cropType">"Crop Type"</label>
                    <select
                        id="cropType"
                        required=true
                        on:change=move |ev| set_choice("cropType", event_target_value(&ev))
                    >
                        <option value="">"Select Crop"</option>
                        {CropType::ALL
                            .iter()
                            .map(|crop| view! { <option value=crop.as_str()>{crop.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="soilType">"Soil Type"</label>
                    <select
                        id="soilType"
                        on:change=move |ev| set_choice("soilType", event_target_value(&ev))
                    >
                        {SoilType::ALL
                            .iter()
                            .map(|soil| {
                                view! {
                                    <option value=soil.as_str() selected={*soil == SoilType::default()}>
                                        {soil.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                {FERTILIZER_FIELDS
                    .iter()
                    .map(|field| {
                        let name = field.name;
                        let value = Signal::derive(move || number_value(draft.with(|d| d.fields()), name));
                        let on_input = move |raw: String| set_choice(name, raw);
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

            // 呼び出し失敗時は代替カードが出るので、メッセージは入力エラーのときだけ
            {move || {
                let error = phase.with(|p| p.error().map(str::to_string));
                error
                    .filter(|_| result.with(|r| r.is_none()))
                    .map(|msg| view! { <div class="alert alert-error">{msg}</div> })
            }}

            {move || result.get().map(|fertilizer| view! { <FertilizerCard fertilizer=fertilizer /> })}
        </section>
    }
}

#[component]
fn FertilizerCard(fertilizer: FertilizerView) -> impl IntoView {
    view! {
        <div class="result">
            <h3>"AI Recommendation"</h3>
            <div class="recommendation">
                <h4>"🌾 Recommended Fertilizer"</h4>
                <p class=fertilizer.category.tone().badge_class()>{fertilizer.fertilizer}</p>
            </div>
            <div class="deficiency">
                <h4>"⚠️ Nutrient Deficiency"</h4>
                <p>{fertilizer.deficiency}</p>
            </div>
            <div class="application">
                <h4>"📋 Application Method"</h4>
                <p>{fertilizer.application}</p>
            </div>
            <div class="tips">
                <h4>"💡 Pro Tips"</h4>
                <ul>
                    {FERTILIZER_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
