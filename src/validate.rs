//! specs.json 문서 검사
//!
//! 키 중복은 오류가 아니라 경고다 — 조회는 첫 일치만 돌려주므로
//! 뒤쪽 행은 화면에서 보이지 않는다는 사실을 워크북 담당자에게 알린다.

use std::collections::{HashMap, HashSet};
use std::fmt;

use seongil_spec_common::{SpecData, SpecRow};

/// 검사 결과 항목
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// 컬렉션이 문서에 없거나 비어 있다 — 해당 패널은 "데이터 없음"이 된다
    EmptyCollection { collection: &'static str },
    /// 키 중복 — 첫 행만 조회 가능
    DuplicateKey {
        collection: &'static str,
        key: String,
        count: usize,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::EmptyCollection { collection } => {
                write!(f, "{collection}: 데이터가 없습니다")
            }
            Finding::DuplicateKey { collection, key, count } => {
                write!(
                    f,
                    "{collection}: 키 \"{key}\" 중복 {count}회 (첫 행만 조회됩니다)"
                )
            }
        }
    }
}

/// 키 필드가 있는 컬렉션 목록 (치수 시트 포함)
fn keyed_collections(data: &SpecData) -> Vec<(&'static str, &'static str, &[SpecRow])> {
    vec![
        ("slbMotorSpecs", "모델", &data.slb_motor_specs),
        ("slb960Dim", "모델", &data.slb960_dim),
        ("slf1P220V60Hz", "형식", &data.slf_1p_220v_60hz),
        ("slf3P220380V60Hz", "형식", &data.slf_3p_220_380v_60hz),
        ("slfADimensions", "TYPE", &data.slf_a_dimensions),
        ("slfDDimensions", "TYPE", &data.slf_d_dimensions),
        ("controllers", "모델", &data.controllers),
        ("hoodSizes", "TYPE", &data.hood_sizes),
        ("shutterSizes", "TYPE", &data.shutter_sizes),
    ]
}

/// 문서 전체 검사
pub fn validate_data(data: &SpecData) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (collection, key_field, rows) in keyed_collections(data) {
        if rows.is_empty() {
            findings.push(Finding::EmptyCollection { collection });
            continue;
        }

        let mut counts: HashMap<String, usize> = HashMap::new();
        for row in rows {
            if let Some(key) = row.text(key_field) {
                *counts.entry(key).or_insert(0) += 1;
            }
        }

        // 첫 등장 순서대로 보고
        let mut reported: HashSet<String> = HashSet::new();
        for row in rows {
            let Some(key) = row.text(key_field) else {
                continue;
            };
            let count = counts[&key];
            if count > 1 && reported.insert(key.clone()) {
                findings.push(Finding::DuplicateKey { collection, key, count });
            }
        }
    }

    if data.inlet_summary.is_empty() {
        findings.push(Finding::EmptyCollection { collection: "inletSummary" });
    }

    findings
}
