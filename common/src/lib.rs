//! 성일 재원표 공통 라이브러리
//!
//! CLI와 Web(WASM)에서 공유되는 타입과 로직:
//! - types/catalog: 재원 문서와 조회
//! - panel: 선택/비교 상태 머신
//! - cards/view: 표시 카드와 패널 렌더 모델

pub mod cards;
pub mod catalog;
pub mod error;
pub mod fields;
pub mod panel;
pub mod types;
pub mod view;

pub use cards::{cards_from_row, format_value, inlet_card, SpecCard, PLACEHOLDER};
pub use catalog::{
    derive_slf_base_type, dim_image_url, display_fields, Catalog, Category, FanPhase,
    DIM_IMG_BASE,
};
pub use error::{Error, Result};
pub use fields::FieldSpec;
pub use panel::{CompareState, SelectorState};
pub use types::{SpecData, SpecRow};
pub use view::{
    render_panel, CardGroup, CompareView, DimImage, PanelBody, PanelView, UNAVAILABLE_NOTICE,
};
