//! 재원 선택/비교 패널
//!
//! 상태 머신 하나(RwSignal<SelectorState>)가 모든 이벤트를 받고,
//! 파생 Memo 가 순수 렌더러(render_panel)를 돌려 화면 모델을 만든다.
//! 이벤트 → 전이 → 재렌더가 항상 1:1 로 이어진다.

use leptos::prelude::*;

use seongil_spec_common::{render_panel, Catalog, PanelBody, PanelView, SelectorState};

use crate::components::{
    compare_panel::ComparePanel, selector_controls::SelectorControls, spec_cards::SpecCards,
    tab_bar::TabBar,
};

#[component]
pub fn SpecPanel(catalog: Catalog) -> impl IntoView {
    let state = RwSignal::new(SelectorState::new(&catalog));
    let catalog = StoredValue::new(catalog);
    let panel = Memo::new(move |_| catalog.with_value(|c| render_panel(c, &state.get())));

    view! {
        <TabBar state=state />
        <SelectorControls state=state catalog=catalog />
        {move || panel_view(panel.get())}
    }
}

/// PanelView → 마크업. 도면 이미지가 있을 때만 2단 그리드 클래스가 붙는다.
fn panel_view(view: PanelView) -> impl IntoView {
    let two_col = view.two_col();

    let body = match view.body {
        PanelBody::Notice(text) => {
            view! { <p class="product-intro-no-data">{text}</p> }.into_any()
        }
        PanelBody::Cards(cards) => view! { <SpecCards cards=cards /> }.into_any(),
    };

    let has_dim = !view.dim_groups.is_empty() || !view.dim_images.is_empty();
    let dim_groups = view.dim_groups;
    let dim_images = view.dim_images;
    let dim = has_dim.then(|| {
        view! {
            <div class="product-intro-dim">
                {dim_groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <h3 class="product-intro-dim-title">{group.title}</h3>
                            <SpecCards cards=group.cards />
                        }
                    })
                    .collect_view()}
                {(!dim_images.is_empty())
                    .then(|| {
                        view! {
                            <div class="product-intro-dim-image-wrap">
                                {dim_images
                                    .into_iter()
                                    .map(|img| {
                                        view! {
                                            <img
                                                src=img.url
                                                alt=format!("{} 치수 도면", img.code)
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        }
    });

    view! {
        <div
            class="product-intro-panel product-intro-two-col active"
            class:product-intro-has-dim-image=two_col
        >
            {body}
            {dim}
        </div>
        {view.compare.map(|compare| view! { <ComparePanel compare=compare /> })}
    }
}
