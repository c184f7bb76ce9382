//! 표시 카드 모델
//!
//! 레코드 + 선언 필드 목록 → 카드 목록. 렌더 계층(웹/터미널)은
//! 여기서 만든 카드를 그대로 그리기만 한다.

use serde::Serialize;

use crate::fields::FieldSpec;
use crate::types::SpecRow;

/// 값이 비어 있을 때 쓰는 자리표시 문자
pub const PLACEHOLDER: &str = "－";

/// 재원 카드 한 장
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecCard {
    pub label: String,
    pub value: String,
    pub unit: Option<String>,
    /// 흡입구 목록의 비고 표기 (다른 카테고리는 None)
    pub note: Option<String>,
}

/// 빈 값/공백/"-"를 자리표시 문자로 치환
pub fn format_value(value: Option<&str>) -> String {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() || trimmed == "-" {
                PLACEHOLDER.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// 선언 필드 목록 순서대로 카드 생성.
/// 레코드에 필드가 없어도 카드는 빠지지 않는다 (자리표시 값으로 표시).
pub fn cards_from_row(row: &SpecRow, fields: &[FieldSpec]) -> Vec<SpecCard> {
    fields
        .iter()
        .map(|f| SpecCard {
            label: f.label.clone(),
            value: format_value(row.text(f.name).as_deref()),
            unit: f.unit.clone(),
            note: None,
        })
        .collect()
}

/// 흡입구 요약 행 → 카드. 값은 mm 단위, 비고는 보조 표기로 붙는다.
pub fn inlet_card(row: &SpecRow) -> SpecCard {
    let note = row
        .text("비고")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    SpecCard {
        label: row.text("항목").unwrap_or_default(),
        value: format_value(row.text("값(mm)").as_deref()),
        unit: Some("mm".to_string()),
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{MOTOR_FIELDS, SHUTTER_FIELDS};

    fn row_json(json: &str) -> SpecRow {
        serde_json::from_str(json).expect("행 파싱 실패")
    }

    #[test]
    fn test_format_value_placeholder_totality() {
        assert_eq!(format_value(None), PLACEHOLDER);
        assert_eq!(format_value(Some("")), PLACEHOLDER);
        assert_eq!(format_value(Some(" ")), PLACEHOLDER);
        assert_eq!(format_value(Some("-")), PLACEHOLDER);
        assert_eq!(format_value(Some(" 1200 ")), "1200");
    }

    #[test]
    fn test_cards_never_omit_declared_fields() {
        // 최대RPM만 있는 모터 행이라도 선언된 9개 카드가 모두 생성된다
        let row = row_json(r#"{"모델": "M1", "최대RPM": 1200}"#);
        let cards = cards_from_row(&row, &MOTOR_FIELDS);
        assert_eq!(cards.len(), MOTOR_FIELDS.len());
        assert_eq!(cards[0].label, "최대RPM");
        assert_eq!(cards[0].value, "1200");
        // 없는 필드는 자리표시
        assert_eq!(cards[1].label, "입력전압");
        assert_eq!(cards[1].unit.as_deref(), Some("V"));
        assert_eq!(cards[1].value, PLACEHOLDER);
    }

    #[test]
    fn test_cards_dash_value_rendered_as_placeholder() {
        let row = row_json(r#"{"TYPE": "SLS-045", "B": "-", "A": 600, "T": " "}"#);
        let cards = cards_from_row(&row, &SHUTTER_FIELDS);
        assert_eq!(cards[0].value, PLACEHOLDER); // B = "-"
        assert_eq!(cards[1].value, "600"); // A
        assert_eq!(cards[2].value, PLACEHOLDER); // T = " "
    }

    #[test]
    fn test_inlet_card_with_note() {
        let row = row_json(r#"{"항목": "흡입구 지름", "값(mm)": 450, "비고": "타공 기준"}"#);
        let card = inlet_card(&row);
        assert_eq!(card.label, "흡입구 지름");
        assert_eq!(card.value, "450");
        assert_eq!(card.unit.as_deref(), Some("mm"));
        assert_eq!(card.note.as_deref(), Some("타공 기준"));
    }

    #[test]
    fn test_inlet_card_without_note() {
        let row = row_json(r#"{"항목": "설치 간격", "값(mm)": ""}"#);
        let card = inlet_card(&row);
        assert_eq!(card.value, PLACEHOLDER);
        assert_eq!(card.note, None);
    }
}
