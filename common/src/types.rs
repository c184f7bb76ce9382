//! 재원표 문서 타입
//!
//! specs.json 의 최상위 컬렉션과 행(레코드) 표현.
//! 시트명 → JSON 키 매핑:
//! - SLB_Motor_Specs → slbMotorSpecs
//! - SLB960_Dim → slb960Dim
//! - SLF_1P_220V_60Hz → slf1P220V60Hz
//! - SLF_3P_220_380V_60Hz → slf3P220380V60Hz
//! - SLF_A_Dimensions → slfADimensions
//! - SLF_D_Dimensions → slfDDimensions
//! - Controllers → controllers
//! - Hood_Sizes → hoodSizes
//! - Shutter_Sizes → shutterSizes
//! - Inlet_Summary → inletSummary

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 재원표 한 행. 필드명(단위 접미 포함) → 스칼라 값.
///
/// 카테고리마다 필드 구성이 다르므로 고정 구조체 대신 필드맵으로 둔다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecRow(pub serde_json::Map<String, Value>);

impl SpecRow {
    /// 필드 값을 표시용 문자열로 반환. 숫자는 JSON 표기 그대로.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }

    /// 키 필드 일치 여부 (첫 일치 탐색에 사용)
    pub fn key_is(&self, field: &str, key: &str) -> bool {
        self.text(field).as_deref() == Some(key)
    }
}

impl FromIterator<(String, Value)> for SpecRow {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        SpecRow(iter.into_iter().collect())
    }
}

/// specs.json 전체. 컬렉션이 빠져 있어도 파싱은 성공한다
/// (해당 카테고리 패널은 "데이터 없음" 처리).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecData {
    pub slb_motor_specs: Vec<SpecRow>,
    pub slb960_dim: Vec<SpecRow>,
    #[serde(rename = "slf1P220V60Hz")]
    pub slf_1p_220v_60hz: Vec<SpecRow>,
    #[serde(rename = "slf3P220380V60Hz")]
    pub slf_3p_220_380v_60hz: Vec<SpecRow>,
    pub slf_a_dimensions: Vec<SpecRow>,
    pub slf_d_dimensions: Vec<SpecRow>,
    pub controllers: Vec<SpecRow>,
    pub hood_sizes: Vec<SpecRow>,
    pub shutter_sizes: Vec<SpecRow>,
    pub inlet_summary: Vec<SpecRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> SpecRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn test_spec_row_text_string_and_number() {
        let json = r#"{"모델": "SLB-960", "최대RPM": 1200}"#;
        let row: SpecRow = serde_json::from_str(json).expect("파싱 실패");
        assert_eq!(row.text("모델").as_deref(), Some("SLB-960"));
        assert_eq!(row.text("최대RPM").as_deref(), Some("1200"));
        assert_eq!(row.text("없는필드"), None);
    }

    #[test]
    fn test_spec_row_key_is() {
        let row = row(&[("모델", "SLB-960")]);
        assert!(row.key_is("모델", "SLB-960"));
        assert!(!row.key_is("모델", "SLB-1250"));
        assert!(!row.key_is("형식", "SLB-960"));
    }

    #[test]
    fn test_spec_data_deserialize_camel_case_keys() {
        let json = r#"{
            "slbMotorSpecs": [{"모델": "M1"}],
            "slf1P220V60Hz": [{"형식": "SLF-045A-1E"}],
            "slf3P220380V60Hz": [],
            "slfADimensions": [{"TYPE": "SLF-045A"}],
            "hoodSizes": [{"TYPE": "SLH-045"}],
            "inletSummary": [{"항목": "흡입구 지름"}]
        }"#;

        let data: SpecData = serde_json::from_str(json).expect("파싱 실패");
        assert_eq!(data.slb_motor_specs.len(), 1);
        assert_eq!(data.slf_1p_220v_60hz.len(), 1);
        assert_eq!(data.slf_a_dimensions.len(), 1);
        assert_eq!(data.hood_sizes.len(), 1);
        assert_eq!(data.inlet_summary.len(), 1);
        // 문서에 없는 컬렉션은 빈 목록
        assert!(data.slb960_dim.is_empty());
        assert!(data.controllers.is_empty());
        assert!(data.shutter_sizes.is_empty());
    }

    #[test]
    fn test_spec_data_serialize_roundtrip() {
        let mut data = SpecData::default();
        data.slb_motor_specs.push(row(&[("모델", "SLB-960")]));
        data.shutter_sizes.push(row(&[("TYPE", "SLS-045")]));

        let json = serde_json::to_string(&data).expect("직렬화 실패");
        assert!(json.contains("\"slbMotorSpecs\""));
        assert!(json.contains("\"shutterSizes\""));

        let restored: SpecData = serde_json::from_str(&json).expect("파싱 실패");
        assert_eq!(data, restored);
    }

    #[test]
    fn test_spec_data_empty_document() {
        let data: SpecData = serde_json::from_str("{}").expect("파싱 실패");
        assert!(data.slb_motor_specs.is_empty());
        assert!(data.inlet_summary.is_empty());
    }
}
