//! 재원 탭 바 컴포넌트

use leptos::prelude::*;

use seongil_spec_common::{Category, SelectorState};

#[component]
pub fn TabBar(state: RwSignal<SelectorState>) -> impl IntoView {
    view! {
        <div class="product-intro-tabs" role="tablist">
            {Category::ALL
                .into_iter()
                .map(|cat| {
                    view! {
                        <button
                            type="button"
                            class="product-intro-tab"
                            class:active=move || state.with(|s| s.active == cat)
                            data-tab=cat.id()
                            on:click=move |_| state.update(|s| s.switch_tab(cat))
                        >
                            {cat.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
