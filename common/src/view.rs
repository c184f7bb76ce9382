//! 패널 렌더러
//!
//! 카탈로그 + 선택 상태 → 화면 모델(PanelView)을 만드는 순수 함수.
//! 같은 입력이면 항상 같은 출력이다 — 숨은 카운터나 부수효과 없음.

use crate::cards::{cards_from_row, inlet_card, SpecCard};
use crate::catalog::{
    derive_slf_base_type, dim_image_url, display_fields, Catalog, Category, FanPhase,
};
use crate::fields::{FAN_DIM_A_FIELDS, FAN_DIM_D_FIELDS, MOTOR_DIM_FIELDS};
use crate::panel::SelectorState;

/// 비교 열 제목 자리표시
pub const PREV_PLACEHOLDER: &str = "이전 선택";
pub const CURRENT_PLACEHOLDER: &str = "현재 선택";

/// 재원 데이터 로드 실패 안내문
pub const UNAVAILABLE_NOTICE: &str = "제품 스펙 데이터를 불러올 수 없습니다.";

/// 치수 카드 그룹
#[derive(Debug, Clone, PartialEq)]
pub struct CardGroup {
    pub title: String,
    pub cards: Vec<SpecCard>,
}

/// 치수 도면 이미지
#[derive(Debug, Clone, PartialEq)]
pub struct DimImage {
    pub code: &'static str,
    pub url: String,
}

impl DimImage {
    fn new(code: &'static str) -> Self {
        DimImage { code, url: dim_image_url(code) }
    }
}

/// 패널 본문: 카드 목록 또는 안내문
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Cards(Vec<SpecCard>),
    Notice(String),
}

/// 비교 패널 (두 열). 조회에 실패한 열은 빈 카드 목록으로 남는다.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareView {
    pub title_prev: String,
    pub title_current: String,
    pub cards_prev: Vec<SpecCard>,
    pub cards_current: Vec<SpecCard>,
}

/// 활성 탭 하나의 렌더 결과
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub category: Category,
    pub body: PanelBody,
    pub dim_groups: Vec<CardGroup>,
    pub dim_images: Vec<DimImage>,
    pub compare: Option<CompareView>,
}

impl PanelView {
    /// 도면 이미지가 표시될 때만 2단 배치. 없으면 내용이 전체 폭을 쓴다.
    pub fn two_col(&self) -> bool {
        !self.dim_images.is_empty()
    }
}

/// 선택 안내문
fn select_notice(category: Category) -> &'static str {
    match category {
        Category::Motor | Category::Controllers => "모델을 선택하세요.",
        Category::Fan => "형식을 선택하세요.",
        Category::Hood | Category::Shutter => "TYPE을 선택하세요.",
        Category::Inlet => "데이터가 없습니다.",
    }
}

/// 키 미발견 안내문
fn not_found_notice(category: Category) -> &'static str {
    match category {
        Category::Fan => "해당 형식이 없습니다.",
        other => select_notice(other),
    }
}

/// 활성 카테고리의 패널을 렌더한다.
pub fn render_panel(catalog: &Catalog, state: &SelectorState) -> PanelView {
    let category = state.active;
    if category == Category::Inlet {
        return render_inlet(catalog);
    }

    let phase = state.fan_phase;
    let mut view = PanelView {
        category,
        body: PanelBody::Notice(select_notice(category).to_string()),
        dim_groups: Vec::new(),
        dim_images: Vec::new(),
        compare: None,
    };

    match state.selection(category) {
        None => {}
        Some(key) => match catalog.find(category, phase, key) {
            None => {
                view.body = PanelBody::Notice(not_found_notice(category).to_string());
            }
            Some(row) => {
                view.body = PanelBody::Cards(cards_from_row(row, display_fields(category, phase)));
                render_dimensions(catalog, category, key, &mut view);
            }
        },
    }

    // 후드/셔터 도면은 레코드 집합이 비어 있지 않으면 표시
    match category {
        Category::Hood if !catalog.records(category, phase).is_empty() => {
            view.dim_images.push(DimImage::new("SLH"));
        }
        Category::Shutter if !catalog.records(category, phase).is_empty() => {
            view.dim_images.push(DimImage::new("SLS"));
        }
        _ => {}
    }

    if state.compare.enabled && state.compare.has_columns() {
        view.compare = Some(render_compare(catalog, state));
    }

    view
}

/// 모터/팬의 치수 카드 그룹과 도면 이미지.
/// 치수 레코드가 없으면 그룹과 이미지 모두 생략한다 (자리표시 카드 없음).
fn render_dimensions(catalog: &Catalog, category: Category, key: &str, view: &mut PanelView) {
    match category {
        Category::Motor => {
            if let Some(dim) = catalog.motor_dim(key) {
                view.dim_groups.push(CardGroup {
                    title: "치수".to_string(),
                    cards: cards_from_row(dim, &MOTOR_DIM_FIELDS),
                });
                view.dim_images.push(DimImage::new("SLB"));
            }
        }
        Category::Fan => {
            let Some(base_type) = derive_slf_base_type(key) else {
                return;
            };
            if let Some(a_row) = catalog.fan_dim_a(&base_type) {
                view.dim_groups.push(CardGroup {
                    title: "치수 (A)".to_string(),
                    cards: cards_from_row(a_row, &FAN_DIM_A_FIELDS),
                });
                view.dim_images.push(DimImage::new("SLF_A"));
            }
            if let Some(d_row) = catalog.fan_dim_d(&base_type) {
                view.dim_groups.push(CardGroup {
                    title: "치수 (D)".to_string(),
                    cards: cards_from_row(d_row, &FAN_DIM_D_FIELDS),
                });
                view.dim_images.push(DimImage::new("SLF_D"));
            }
        }
        _ => {}
    }
}

/// 흡입구: 선택자 없는 정적 목록 + 도면
fn render_inlet(catalog: &Catalog) -> PanelView {
    let rows = catalog.records(Category::Inlet, FanPhase::SinglePhase);
    let (body, dim_images) = if rows.is_empty() {
        (PanelBody::Notice(select_notice(Category::Inlet).to_string()), Vec::new())
    } else {
        (
            PanelBody::Cards(rows.iter().map(inlet_card).collect()),
            vec![DimImage::new("INLET")],
        )
    };
    PanelView {
        category: Category::Inlet,
        body,
        dim_groups: Vec::new(),
        dim_images,
        compare: None,
    }
}

/// 비교 패널: 두 키를 같은 목록/필드로 조회해 두 열을 만든다.
/// 키가 비어 있으면 자리표시 제목, 조회 미스면 빈 열.
fn render_compare(catalog: &Catalog, state: &SelectorState) -> CompareView {
    let category = state.active;
    let phase = state.fan_phase;
    let fields = display_fields(category, phase);

    let column = |key: Option<&str>| -> Vec<SpecCard> {
        key.and_then(|k| catalog.find(category, phase, k))
            .map(|row| cards_from_row(row, fields))
            .unwrap_or_default()
    };

    CompareView {
        title_prev: state
            .compare
            .previous
            .clone()
            .unwrap_or_else(|| PREV_PLACEHOLDER.to_string()),
        title_current: state
            .compare
            .current
            .clone()
            .unwrap_or_else(|| CURRENT_PLACEHOLDER.to_string()),
        cards_prev: column(state.compare.previous.as_deref()),
        cards_current: column(state.compare.current.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PLACEHOLDER;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "slbMotorSpecs": [
                    {"모델": "M1", "최대RPM": 1200, "입력전압(V)": 220},
                    {"모델": "M2", "최대RPM": 1500, "입력전압(V)": 220}
                ],
                "slb960Dim": [{"모델": "M1", "높이(mm)": 330, "지름(mm)": 960}],
                "slf1P220V60Hz": [
                    {"형식": "SLF-045A-1E", "날개직경(mm)": 450},
                    {"형식": "SLF-045D-1E", "날개직경(mm)": 450},
                    {"형식": "VF-300", "날개직경(mm)": 300}
                ],
                "slfADimensions": [{"TYPE": "SLF-045A", "A": 520, "B": 480}],
                "slfDDimensions": [{"TYPE": "SLF-045D", "A": 540}],
                "hoodSizes": [{"TYPE": "SLH-045", "A": 600}],
                "shutterSizes": [{"TYPE": "SLS-045", "B": 520}],
                "inletSummary": [
                    {"항목": "흡입구 지름", "값(mm)": 450, "비고": "타공 기준"},
                    {"항목": "설치 간격", "값(mm)": "-"}
                ]
            }"#,
        )
        .expect("카탈로그 로드 실패")
    }

    fn state(catalog: &Catalog) -> SelectorState {
        SelectorState::new(catalog)
    }

    #[test]
    fn test_motor_panel_cards_and_dimensions() {
        let c = catalog();
        let s = state(&c);
        let view = render_panel(&c, &s);

        assert_eq!(view.category, Category::Motor);
        let PanelBody::Cards(cards) = &view.body else {
            panic!("카드가 아니라 안내문: {:?}", view.body);
        };
        assert_eq!(cards[0].value, "1200");
        // M1 은 치수 레코드가 있으므로 그룹 + 도면 + 2단 배치
        assert_eq!(view.dim_groups.len(), 1);
        assert_eq!(view.dim_groups[0].title, "치수");
        assert_eq!(view.dim_groups[0].cards[0].value, "330");
        assert_eq!(view.dim_images[0].code, "SLB");
        assert!(view.two_col());
    }

    #[test]
    fn test_motor_without_dimension_record_hides_subpanel() {
        let c = catalog();
        let mut s = state(&c);
        s.select(Category::Motor, "M2");
        let view = render_panel(&c, &s);

        assert!(matches!(view.body, PanelBody::Cards(_)));
        assert!(view.dim_groups.is_empty());
        assert!(view.dim_images.is_empty());
        assert!(!view.two_col());
    }

    #[test]
    fn test_missing_key_renders_not_found_notice() {
        let c = catalog();
        let mut s = state(&c);
        s.switch_tab(Category::Fan);
        s.select(Category::Fan, "SLF-999A-1E");
        let view = render_panel(&c, &s);

        assert_eq!(view.body, PanelBody::Notice("해당 형식이 없습니다.".to_string()));
        assert!(view.dim_groups.is_empty());
        assert!(view.dim_images.is_empty());
    }

    #[test]
    fn test_fan_dimension_derivation() {
        // "SLF-045A-1E" → 기본 TYPE "SLF-045A" → A형 치수만 표시
        let c = catalog();
        let mut s = state(&c);
        s.switch_tab(Category::Fan);
        let view = render_panel(&c, &s);

        assert_eq!(view.dim_groups.len(), 1);
        assert_eq!(view.dim_groups[0].title, "치수 (A)");
        assert_eq!(view.dim_images.len(), 1);
        assert_eq!(view.dim_images[0].code, "SLF_A");
        assert_eq!(view.dim_images[0].url, "assets/images/dimensions/SLF_A_Size.png");
    }

    #[test]
    fn test_fan_underivable_form_hides_dimensions() {
        // 패턴 불일치 형식은 치수 패널이 통째로 사라진다
        let c = catalog();
        let mut s = state(&c);
        s.switch_tab(Category::Fan);
        s.select(Category::Fan, "VF-300");
        let view = render_panel(&c, &s);

        assert!(matches!(view.body, PanelBody::Cards(_)));
        assert!(view.dim_groups.is_empty());
        assert!(view.dim_images.is_empty());
        assert!(!view.two_col());
    }

    #[test]
    fn test_hood_image_follows_record_set() {
        let c = catalog();
        let mut s = state(&c);
        s.switch_tab(Category::Hood);
        let view = render_panel(&c, &s);
        assert_eq!(view.dim_images[0].code, "SLH");
        assert!(view.two_col());

        // 컬렉션이 비면 이미지도 없다
        let empty = Catalog::from_json("{}").unwrap();
        let mut s2 = SelectorState::new(&empty);
        s2.switch_tab(Category::Hood);
        let view2 = render_panel(&empty, &s2);
        assert_eq!(view2.body, PanelBody::Notice("TYPE을 선택하세요.".to_string()));
        assert!(view2.dim_images.is_empty());
    }

    #[test]
    fn test_inlet_listing_and_image() {
        let c = catalog();
        let mut s = state(&c);
        s.switch_tab(Category::Inlet);
        let view = render_panel(&c, &s);

        let PanelBody::Cards(cards) = &view.body else {
            panic!("흡입구 목록이 안내문으로 렌더됨");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].unit.as_deref(), Some("mm"));
        assert_eq!(cards[0].note.as_deref(), Some("타공 기준"));
        assert_eq!(cards[1].value, PLACEHOLDER);
        assert_eq!(view.dim_images[0].code, "INLET");
        assert_eq!(view.compare, None);
    }

    #[test]
    fn test_inlet_empty_collection_notice() {
        let c = Catalog::from_json("{}").unwrap();
        let mut s = SelectorState::new(&c);
        s.switch_tab(Category::Inlet);
        let view = render_panel(&c, &s);
        assert_eq!(view.body, PanelBody::Notice("데이터가 없습니다.".to_string()));
        assert!(view.dim_images.is_empty());
    }

    #[test]
    fn test_compare_panel_two_columns() {
        // M2 선택 → 비교 켬 → (이전 선택, M2) → M1 선택 → (M2, M1)
        let c = catalog();
        let mut s = state(&c);
        s.select(Category::Motor, "M2");
        s.toggle_compare(true);

        let view = render_panel(&c, &s);
        let cmp = view.compare.expect("비교 패널 없음");
        assert_eq!(cmp.title_prev, PREV_PLACEHOLDER);
        assert_eq!(cmp.title_current, "M2");
        assert!(cmp.cards_prev.is_empty());
        assert_eq!(cmp.cards_current[0].value, "1500");

        s.select(Category::Motor, "M1");
        let view = render_panel(&c, &s);
        let cmp = view.compare.expect("비교 패널 없음");
        assert_eq!(cmp.title_prev, "M2");
        assert_eq!(cmp.title_current, "M1");
        assert_eq!(cmp.cards_prev[0].value, "1500");
        assert_eq!(cmp.cards_current[0].value, "1200");
    }

    #[test]
    fn test_compare_hidden_when_disabled() {
        let c = catalog();
        let s = state(&c);
        let view = render_panel(&c, &s);
        assert_eq!(view.compare, None);
    }

    #[test]
    fn test_compare_stale_key_renders_empty_column() {
        // 상 전환 뒤 남은 stale 비교 키는 빈 열로 렌더된다
        let c = catalog();
        let mut s = state(&c);
        s.switch_tab(Category::Fan);
        s.toggle_compare(true);
        s.set_fan_phase(FanPhase::ThreePhase, &c);

        let view = render_panel(&c, &s);
        let cmp = view.compare.expect("비교 패널 없음");
        // current 는 단상 목록의 키라 삼상 목록에서 미발견
        assert_eq!(cmp.title_current, "SLF-045A-1E");
        assert!(cmp.cards_current.is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        // 같은 상태로 두 번 렌더해도 결과가 같다
        let c = catalog();
        let mut s = state(&c);
        s.toggle_compare(true);
        s.select(Category::Motor, "M2");

        let first = render_panel(&c, &s);
        let second = render_panel(&c, &s);
        assert_eq!(first, second);
    }
}
