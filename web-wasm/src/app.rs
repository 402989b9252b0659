//! メインアプリケーションコンポーネント
//!
//! パス名でページを切り替える。ページ間の遷移は通常のリンク/`location.href`。

use crate::api::client::ApiClient;
use crate::components::header::Header;
use crate::pages::{
    crop::CropPage, detect::DetectPage, fertilizer::FertilizerPage, results::ResultsPage,
};
use leptos::prelude::*;

/// 表示ページ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Detect,
    Results,
    Crop,
    Fertilizer,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/index.html" => Page::Detect,
            "/results" => Page::Results,
            "/crop-recommendation" => Page::Crop,
            "/fertilizer" => Page::Fertilizer,
            _ => Page::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Detect | Page::NotFound => "/",
            Page::Results => "/results",
            Page::Crop => "/crop-recommendation",
            Page::Fertilizer => "/fertilizer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Detect => "Disease Detection",
            Page::Results => "Analysis Results",
            Page::Crop => "Crop Recommendation",
            Page::Fertilizer => "Fertilizer Guide",
            Page::NotFound => "Not Found",
        }
    }
}

/// 別ページへ遷移（ページ全体を読み直す）
pub fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        gloo::console::error!(e);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::default());

    let location = web_sys::window().map(|w| w.location());
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let query = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();
    let page = Page::from_path(&path);

    view! {
        <div class="container">
            <Header current=page />

            {match page {
                Page::Detect => view! { <DetectPage /> }.into_any(),
                Page::Results => view! { <ResultsPage query=query /> }.into_any(),
                Page::Crop => view! { <CropPage /> }.into_any(),
                Page::Fertilizer => view! { <FertilizerPage /> }.into_any(),
                Page::NotFound => view! {
                    <div class="card empty-state">
                        <p>"Page not found"</p>
                        <a href=Page::Detect.path() class="btn btn-primary">"Go back"</a>
                    </div>
                }
                .into_any(),
            }}

            <footer class="footer">
                <p class="text-muted">"Making Agriculture Smarter, One Plant at a Time 🌱"</p>
            </footer>
        </div>
    }
}
