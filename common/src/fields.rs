//! 카테고리별 표시 필드 선언
//!
//! 재원표에서 화면에 노출하는 컬럼의 고정 목록. 레코드에 더 많은 필드가
//! 있어도 여기 선언된 것만, 선언 순서대로 표시한다.
//! 필드명 끝의 괄호 단위는 선언 시점에 한 번만 분리해 둔다.

use lazy_static::lazy_static;
use regex::Regex;

/// 표시 필드 하나: 원본 필드명, 라벨, 단위 접미
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: String,
    pub unit: Option<String>,
}

impl FieldSpec {
    /// `"전류(A)"` → label `"전류"`, unit `"A"`. 괄호가 없으면 단위 없음.
    fn parse(name: &'static str) -> Self {
        lazy_static! {
            static ref UNIT_RE: Regex = Regex::new(r"\s*\(([^)]+)\)\s*$").unwrap();
        }
        let unit = UNIT_RE.captures(name).map(|c| c[1].to_string());
        let label = UNIT_RE.replace(name, "").trim().to_string();
        FieldSpec { name, label, unit }
    }
}

fn parse_all(names: &[&'static str]) -> Vec<FieldSpec> {
    names.iter().map(|n| FieldSpec::parse(n)).collect()
}

lazy_static! {
    /// SLB 모터 재원
    pub static ref MOTOR_FIELDS: Vec<FieldSpec> = parse_all(&[
        "최대RPM",
        "입력전압(V)",
        "전류(A)",
        "소비전력(W)",
        "풍속(m/s)",
        "풍량@0Pa(CMH)",
        "풍량@30Pa",
        "풍량@50Pa",
        "풍량@100Pa",
    ]);

    /// SLB960 치수
    pub static ref MOTOR_DIM_FIELDS: Vec<FieldSpec> = parse_all(&["높이(mm)", "지름(mm)"]);

    /// SLF 단상 220V 60Hz
    pub static ref FAN_1P_FIELDS: Vec<FieldSpec> = parse_all(&[
        "날개직경(mm)",
        "회전수(RPM)",
        "전류(A)",
        "소비전력(W/HP)",
        "콘덴서",
        "풍량(CFM)",
        "풍량(CMH)",
        "중량(kg)",
    ]);

    /// SLF 삼상 220/380V 60Hz
    pub static ref FAN_3P_FIELDS: Vec<FieldSpec> = parse_all(&[
        "날개직경(mm)",
        "회전수(RPM)",
        "전류(220V)",
        "전류(380V)",
        "풍량(CFM)",
        "풍량(CMH)",
        "중량(kg)",
    ]);

    /// SLF A형 치수
    pub static ref FAN_DIM_A_FIELDS: Vec<FieldSpec> =
        parse_all(&["A", "B", "C(타공)", "D", "E"]);

    /// SLF D형 치수
    pub static ref FAN_DIM_D_FIELDS: Vec<FieldSpec> =
        parse_all(&["날개직경(mm)", "A", "B", "C"]);

    /// 컨트롤러 재원
    pub static ref CONTROLLER_FIELDS: Vec<FieldSpec> = parse_all(&[
        "정격허용전류",
        "전선굵기(SQ)",
        "1채널 팬속도(수동)",
        "3채널 팬속도",
        "릴레이3채널",
        "릴레이6채널",
        "타이머(10~990초)",
        "타이머(시/분/초)",
        "온도보정",
        "제품안전",
        "최저/최고온도기억",
        "온도편차설정",
        "경보기능",
    ]);

    /// 후드 치수
    pub static ref HOOD_FIELDS: Vec<FieldSpec> =
        parse_all(&["A", "B", "C", "D", "E", "F(타공)"]);

    /// 셔터 치수
    pub static ref SHUTTER_FIELDS: Vec<FieldSpec> = parse_all(&["B", "A", "T"]);
}
