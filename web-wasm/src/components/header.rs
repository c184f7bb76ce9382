//! 헤더 컴포넌트

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"제품 재원표"</h1>
            <p class="header-subtitle">"모터 · 환기팬 · 컨트롤러 · 후드 · 셔터 · 흡입구 상세 규격"</p>
        </header>
    }
}
