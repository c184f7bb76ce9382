//! 비교 패널 컴포넌트 (두 열)

use leptos::prelude::*;

use seongil_spec_common::CompareView;

use crate::components::spec_cards::SpecCards;

#[component]
pub fn ComparePanel(compare: CompareView) -> impl IntoView {
    view! {
        <div id="productIntroComparePanel" class="product-intro-compare">
            <div class="product-intro-compare-col">
                <h3 class="product-intro-compare-title">{compare.title_prev}</h3>
                <SpecCards cards=compare.cards_prev />
            </div>
            <div class="product-intro-compare-col">
                <h3 class="product-intro-compare-title">{compare.title_current}</h3>
                <SpecCards cards=compare.cards_current />
            </div>
        </div>
    }
}
