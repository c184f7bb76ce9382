//! 재원 카탈로그: 카테고리 정의와 조회
//!
//! 로드 후 불변. 조회는 항상 첫 일치(first match)를 돌려준다 —
//! 키 중복은 재원표 쪽 오류이며 뒤쪽 행은 조회로 도달할 수 없다.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fields::{
    FieldSpec, CONTROLLER_FIELDS, FAN_1P_FIELDS, FAN_3P_FIELDS, HOOD_FIELDS, MOTOR_FIELDS,
    SHUTTER_FIELDS,
};
use crate::types::{SpecData, SpecRow};

/// 재원 탭 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Motor,
    Fan,
    Controllers,
    Hood,
    Shutter,
    Inlet,
}

impl Category {
    /// 탭 표시 순서
    pub const ALL: [Category; 6] = [
        Category::Motor,
        Category::Fan,
        Category::Controllers,
        Category::Hood,
        Category::Shutter,
        Category::Inlet,
    ];

    /// 탭 id (data-tab 값)
    pub fn id(&self) -> &'static str {
        match self {
            Category::Motor => "motor",
            Category::Fan => "fan",
            Category::Controllers => "controllers",
            Category::Hood => "hood",
            Category::Shutter => "shutter",
            Category::Inlet => "inlet",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }

    /// 탭 라벨
    pub fn label(&self) -> &'static str {
        match self {
            Category::Motor => "모터",
            Category::Fan => "환기팬",
            Category::Controllers => "컨트롤러",
            Category::Hood => "후드",
            Category::Shutter => "셔터",
            Category::Inlet => "흡입구",
        }
    }

    /// 조회 키 필드명. 흡입구는 선택자가 없는 정적 목록이다.
    pub fn key_field(&self) -> Option<&'static str> {
        match self {
            Category::Motor | Category::Controllers => Some("모델"),
            Category::Fan => Some("형식"),
            Category::Hood | Category::Shutter => Some("TYPE"),
            Category::Inlet => None,
        }
    }

    pub fn has_selector(&self) -> bool {
        self.key_field().is_some()
    }
}

/// 환기팬 상 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FanPhase {
    #[default]
    SinglePhase,
    ThreePhase,
}

impl FanPhase {
    /// 라디오 입력 값
    pub fn id(&self) -> &'static str {
        match self {
            FanPhase::SinglePhase => "1p",
            FanPhase::ThreePhase => "3p",
        }
    }

    pub fn from_id(id: &str) -> Option<FanPhase> {
        match id {
            "1p" => Some(FanPhase::SinglePhase),
            "3p" => Some(FanPhase::ThreePhase),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FanPhase::SinglePhase => "단상 220V 60Hz",
            FanPhase::ThreePhase => "삼상 220/380V 60Hz",
        }
    }
}

/// 치수 도면 이미지 베이스 경로
pub const DIM_IMG_BASE: &str = "assets/images/dimensions/";

/// 도면 코드 → 이미지 URL (`<BASE>/<CODE>_Size.png` 규칙)
pub fn dim_image_url(code: &str) -> String {
    format!("{DIM_IMG_BASE}{code}_Size.png")
}

/// SLF 형식 코드에서 치수 조회용 기본 TYPE 추출.
/// 예: `"SLF-045D-1E"` → `"SLF-045D"`. 패턴 불일치면 None (치수 패널 숨김).
pub fn derive_slf_base_type(form: &str) -> Option<String> {
    lazy_static! {
        static ref BASE_RE: Regex = Regex::new(r"^(SLF-\d+(?:A|D))").unwrap();
    }
    BASE_RE.captures(form).map(|c| c[1].to_string())
}

/// 카테고리(와 팬 상)에 따른 표시 필드 목록
pub fn display_fields(category: Category, phase: FanPhase) -> &'static [FieldSpec] {
    match category {
        Category::Motor => &MOTOR_FIELDS,
        Category::Fan => match phase {
            FanPhase::SinglePhase => &FAN_1P_FIELDS,
            FanPhase::ThreePhase => &FAN_3P_FIELDS,
        },
        Category::Controllers => &CONTROLLER_FIELDS,
        Category::Hood => &HOOD_FIELDS,
        Category::Shutter => &SHUTTER_FIELDS,
        // 흡입구는 고정 3컬럼 목록을 전용 카드로 렌더한다
        Category::Inlet => &[],
    }
}

/// 읽기 전용 재원 카탈로그
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    data: SpecData,
}

impl Catalog {
    pub fn new(data: SpecData) -> Self {
        Catalog { data }
    }

    /// JSON 문서에서 로드. 파싱 실패는 `CatalogUnavailable`.
    pub fn from_json(text: &str) -> Result<Self> {
        let data: SpecData =
            serde_json::from_str(text).map_err(|e| Error::CatalogUnavailable(e.to_string()))?;
        Ok(Catalog::new(data))
    }

    pub fn data(&self) -> &SpecData {
        &self.data
    }

    /// 카테고리의 활성 레코드 목록 (팬은 상에 따라 갈린다)
    pub fn records(&self, category: Category, phase: FanPhase) -> &[SpecRow] {
        match category {
            Category::Motor => &self.data.slb_motor_specs,
            Category::Fan => match phase {
                FanPhase::SinglePhase => &self.data.slf_1p_220v_60hz,
                FanPhase::ThreePhase => &self.data.slf_3p_220_380v_60hz,
            },
            Category::Controllers => &self.data.controllers,
            Category::Hood => &self.data.hood_sizes,
            Category::Shutter => &self.data.shutter_sizes,
            Category::Inlet => &self.data.inlet_summary,
        }
    }

    /// 키로 레코드 조회 (첫 일치)
    pub fn find(&self, category: Category, phase: FanPhase, key: &str) -> Option<&SpecRow> {
        let field = category.key_field()?;
        self.records(category, phase).iter().find(|r| r.key_is(field, key))
    }

    /// 기본 선택: 첫 레코드의 키
    pub fn first_key(&self, category: Category, phase: FanPhase) -> Option<String> {
        let field = category.key_field()?;
        self.records(category, phase).first().and_then(|r| r.text(field))
    }

    /// 선택자 옵션 목록 (선언 순서)
    pub fn option_keys(&self, category: Category, phase: FanPhase) -> Vec<String> {
        let Some(field) = category.key_field() else {
            return Vec::new();
        };
        self.records(category, phase)
            .iter()
            .filter_map(|r| r.text(field))
            .collect()
    }

    /// SLB960 치수 레코드 (모터 모델로 조회)
    pub fn motor_dim(&self, model: &str) -> Option<&SpecRow> {
        self.data.slb960_dim.iter().find(|r| r.key_is("모델", model))
    }

    /// SLF A형 치수 레코드 (기본 TYPE으로 조회)
    pub fn fan_dim_a(&self, base_type: &str) -> Option<&SpecRow> {
        self.data.slf_a_dimensions.iter().find(|r| r.key_is("TYPE", base_type))
    }

    /// SLF D형 치수 레코드 (기본 TYPE으로 조회)
    pub fn fan_dim_d(&self, base_type: &str) -> Option<&SpecRow> {
        self.data.slf_d_dimensions.iter().find(|r| r.key_is("TYPE", base_type))
    }
}
