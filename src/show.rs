//! 재원 카드 터미널 출력
//!
//! 웹 패널과 같은 렌더러(render_panel)를 써서 한 레코드의 카드와
//! 치수 그룹을 텍스트로 찍는다. 워크북 변환 결과를 눈으로 확인하는 용도.

use seongil_spec_common::{
    render_panel, Catalog, Category, FanPhase, PanelBody, SelectorState, SpecCard,
};

fn card_line(card: &SpecCard) -> String {
    let mut line = format!("{}: {}", card.label, card.value);
    if let Some(unit) = &card.unit {
        line.push(' ');
        line.push_str(unit);
    }
    if let Some(note) = &card.note {
        line.push_str(&format!(" ({note})"));
    }
    line.push('\n');
    line
}

/// 한 선택의 패널을 텍스트로 렌더
pub fn render_text(
    catalog: &Catalog,
    category: Category,
    phase: FanPhase,
    key: Option<&str>,
) -> String {
    let mut state = SelectorState::new(catalog);
    if category == Category::Fan {
        state.set_fan_phase(phase, catalog);
    }
    state.switch_tab(category);
    if let Some(key) = key {
        state.select(category, key);
    }

    let view = render_panel(catalog, &state);

    let mut out = String::new();
    let title = match state.active_selection() {
        Some(selected) if category.has_selector() => {
            format!("{} · {}", category.label(), selected)
        }
        _ => category.label().to_string(),
    };
    out.push_str(&format!("=== {title} ===\n"));

    match &view.body {
        PanelBody::Notice(text) => {
            out.push_str(text);
            out.push('\n');
        }
        PanelBody::Cards(cards) => {
            for card in cards {
                out.push_str(&card_line(card));
            }
        }
    }

    for group in &view.dim_groups {
        out.push_str(&format!("\n[{}]\n", group.title));
        for card in &group.cards {
            out.push_str(&card_line(card));
        }
    }

    for image in &view.dim_images {
        out.push_str(&format!("\n도면: {}\n", image.url));
    }

    out
}
