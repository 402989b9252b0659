//! 病害検出ページ（トップページ）
//!
//! 画像を送信し、成功したら結果ページへ `?data=` 付きで遷移する。

use crate::api::client::ApiClient;
use crate::app::navigate;
use crate::components::upload_area::UploadArea;
use farmguard_common::{transport, DetectionResult, ImageDraft, StagedFile, SubmitPhase};
use leptos::prelude::*;
use leptos::task::spawn_local;

const UPLOAD_ERROR: &str = "Error uploading image. Please try again.";

#[component]
pub fn DetectPage() -> impl IntoView {
    let client = use_context::<ApiClient>().unwrap_or_default();
    let (draft, set_draft) = signal(ImageDraft::new());
    let (preview, set_preview) = signal(None::<String>);
    let (phase, set_phase) = signal(SubmitPhase::Idle);
    let is_busy = Signal::derive(move || phase.with(|p| p.is_busy()));

    let on_file_selected = move |file: StagedFile, data_url: String| {
        set_draft.update(|d| d.stage(file));
        set_preview.set(Some(data_url));
    };

    let on_clear = move |_| {
        set_draft.update(|d| d.clear());
        set_preview.set(None);
    };

    let on_submit = move |_| {
        // ファイル未選択ならネットワークに出ない
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
            match client.invoke::<DetectionResult>(endpoint, &request).await {
                Ok(result) => match transport::encode(&result) {
                    Ok(payload) => {
                        set_phase.update(|p| p.succeed());
                        navigate(&payload.results_url());
                    }
                    Err(e) => set_phase.update(|p| p.fail(e.to_string())),
                },
                Err(e) => {
                    gloo::console::error!(format!("detect failed: {}", e));
                    set_phase.update(|p| p.fail(UPLOAD_ERROR));
                }
            }
        });
    };

    view! {
        <section class="card">
            <h2>"🔬 Disease Detection"</h2>
            <p class="text-muted">"Upload a photo of a plant leaf to detect diseases."</p>

            <UploadArea is_busy=is_busy on_file_selected=on_file_selected />

            {move || {
                draft
                    .with(|d| d.staged().map(|f| format!("{} ({:.2} MB)", f.file_name, f.size_mb())))
                    .map(|info| {
                        view! {
                            <div class="preview">
                                {preview.get().map(|src| view! { <img src=src alt="Selected image" /> })}
                                <p class="file-info">{info}</p>
                                <button
                                    class="btn btn-tertiary btn-small"
                                    disabled=move || is_busy.get()
                                    on:click=on_clear
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
            }}

            {move || {
                phase
                    .with(|p| p.error().map(str::to_string))
                    .map(|msg| view! { <div class="alert alert-error">{msg}</div> })
            }}

            <button
                class="btn btn-primary"
                disabled=move || is_busy.get() || !draft.with(|d| d.is_ready())
                on:click=on_submit
            >
                {move || if is_busy.get() { "Analyzing..." } else { "Analyze Image" }}
            </button>
        </section>
    }
}
