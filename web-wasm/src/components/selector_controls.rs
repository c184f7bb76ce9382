//! 선택 컨트롤 컴포넌트
//!
//! 활성 탭의 모델/형식/TYPE 선택자, 환기팬 단상/삼상 라디오,
//! 비교 모드 체크박스. 흡입구 탭은 선택자가 없는 정적 목록이라
//! 컨트롤 전체가 사라진다.

use leptos::prelude::*;

use seongil_spec_common::{Catalog, Category, FanPhase, SelectorState};

#[component]
pub fn SelectorControls(
    state: RwSignal<SelectorState>,
    catalog: StoredValue<Catalog>,
) -> impl IntoView {
    let options = Memo::new(move |_| {
        state.with(|s| catalog.with_value(|c| c.option_keys(s.active, s.fan_phase)))
    });
    let has_selector = move || state.with(|s| s.active.has_selector());
    let is_fan = move || state.with(|s| s.active == Category::Fan);

    view! {
        <div class="product-intro-controls">
            <Show when=is_fan>
                <div class="product-intro-phase" role="radiogroup">
                    {[FanPhase::SinglePhase, FanPhase::ThreePhase]
                        .into_iter()
                        .map(|phase| {
                            view! {
                                <label class="product-intro-phase-option">
                                    <input
                                        type="radio"
                                        name="fanPhase"
                                        value=phase.id()
                                        checked=move || state.with(|s| s.fan_phase == phase)
                                        on:change=move |_| {
                                            catalog.with_value(|c| {
                                                state.update(|s| s.set_fan_phase(phase, c));
                                            });
                                        }
                                    />
                                    {phase.label()}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <Show when=has_selector>
                <select
                    class="product-intro-select"
                    on:change=move |ev| {
                        let key = event_target_value(&ev);
                        state.update(|s| {
                            let category = s.active;
                            s.select(category, key.clone());
                        });
                    }
                >
                    <For
                        each=move || options.get()
                        key=|key| key.clone()
                        children=move |key| {
                            let selected_key = key.clone();
                            view! {
                                <option
                                    value=key.clone()
                                    selected=move || {
                                        state.with(|s| {
                                            s.active_selection() == Some(selected_key.as_str())
                                        })
                                    }
                                >
                                    {key.clone()}
                                </option>
                            }
                        }
                    />
                </select>
            </Show>

            <Show when=move || state.with(|s| s.active != Category::Inlet)>
                <label class="product-intro-compare-toggle">
                    <input
                        type="checkbox"
                        id="productIntroCompareMode"
                        prop:checked=move || state.with(|s| s.compare.enabled)
                        on:change=move |ev| {
                            let enabled = event_target_checked(&ev);
                            state.update(|s| s.toggle_compare(enabled));
                        }
                    />
                    "선택 비교"
                </label>
            </Show>
        </div>
    }
}
