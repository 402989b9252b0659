//! ヘッダーコンポーネント

use crate::app::Page;
use leptos::prelude::*;

const NAV_PAGES: [Page; 3] = [Page::Detect, Page::Crop, Page::Fertilizer];

#[component]
pub fn Header(current: Page) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🌿 FarmGuard"</h1>
            <nav class="nav">
                {NAV_PAGES
                    .into_iter()
                    .map(|page| {
                        view! {
                            <a href=page.path() class="nav-link" class:active={page == current}>
                                {page.title()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
