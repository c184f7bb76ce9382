//! 메인 애플리케이션 컴포넌트

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use seongil_spec_common::{Catalog, UNAVAILABLE_NOTICE};

use crate::api::specs;
use crate::components::{header::Header, spec_panel::SpecPanel};

/// 카탈로그 로드 상태
#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// 메인 애플리케이션 컴포넌트.
/// 로드 완료 전에는 조작 패널(이벤트 핸들러)을 만들지 않는다.
#[component]
pub fn App() -> impl IntoView {
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (catalog, set_catalog) = signal(None::<Catalog>);

    spawn_local(async move {
        match specs::load_catalog().await {
            Ok(loaded) => {
                set_catalog.set(Some(loaded));
                set_load_state.set(LoadState::Ready);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("재원 데이터 로드 실패: {e}").into());
                set_load_state.set(LoadState::Failed);
            }
        }
    });

    view! {
        <div class="container">
            <Header />

            <section id="productIntroSection" class="product-intro">
                {move || match load_state.get() {
                    LoadState::Loading => view! {
                        <p class="product-intro-no-data">"재원 데이터를 불러오는 중..."</p>
                    }
                    .into_any(),
                    LoadState::Failed => view! {
                        <p class="product-intro-no-data">{UNAVAILABLE_NOTICE}</p>
                    }
                    .into_any(),
                    LoadState::Ready => {
                        let loaded = catalog.get().unwrap_or_default();
                        view! { <SpecPanel catalog=loaded /> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
