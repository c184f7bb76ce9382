//! 재원 카드 그리드 컴포넌트

use leptos::prelude::*;

use seongil_spec_common::SpecCard;

/// 카드 한 장. 단위와 비고는 값 옆에 보조 표기로 붙는다.
fn card_view(card: SpecCard) -> impl IntoView {
    view! {
        <div class="product-intro-card">
            <div class="product-intro-card-label">{card.label}</div>
            <div class="product-intro-card-value">
                {card.value}
                {card
                    .unit
                    .map(|unit| view! { <span class="product-intro-card-unit">{unit}</span> })}
                {card
                    .note
                    .map(|note| view! { <span class="product-intro-card-unit">{note}</span> })}
            </div>
        </div>
    }
}

#[component]
pub fn SpecCards(cards: Vec<SpecCard>) -> impl IntoView {
    view! {
        <div class="product-intro-cards">
            {cards.into_iter().map(card_view).collect_view()}
        </div>
    }
}
