//! 제품_재원표.xlsx → specs.json 변환
//!
//! 시트명 → JSON 컬렉션 매핑은 재원표 워크북 구성을 그대로 따른다.
//! 대상 외 시트는 무시한다. 모든 셀 값은 정리된 문자열로 담고,
//! 빈 셀은 빈 문자열, 값이 하나도 없는 행은 건너뛴다.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value;

use seongil_spec_common::{SpecData, SpecRow};

use crate::error::{Result, SpecCliError};

/// 시트명 → SpecData 컬렉션
fn collection_mut<'a>(data: &'a mut SpecData, sheet: &str) -> Option<&'a mut Vec<SpecRow>> {
    match sheet {
        "SLB_Motor_Specs" => Some(&mut data.slb_motor_specs),
        "SLB960_Dim" => Some(&mut data.slb960_dim),
        "SLF_1P_220V_60Hz" => Some(&mut data.slf_1p_220v_60hz),
        "SLF_3P_220_380V_60Hz" => Some(&mut data.slf_3p_220_380v_60hz),
        "SLF_A_Dimensions" => Some(&mut data.slf_a_dimensions),
        "SLF_D_Dimensions" => Some(&mut data.slf_d_dimensions),
        "Controllers" => Some(&mut data.controllers),
        "Hood_Sizes" => Some(&mut data.hood_sizes),
        "Shutter_Sizes" => Some(&mut data.shutter_sizes),
        "Inlet_Summary" => Some(&mut data.inlet_summary),
        _ => None,
    }
}

/// 셀 값을 정리된 문자열로. 정수형 실수는 소수점 없이 적는다.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

/// 워크북을 읽어 재원 문서를 만든다
pub fn convert_workbook(path: &Path) -> Result<SpecData> {
    if !path.exists() {
        return Err(SpecCliError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let mut data = SpecData::default();

    for (sheet, range) in workbook.worksheets() {
        let Some(rows_out) = collection_mut(&mut data, &sheet) else {
            continue;
        };

        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            continue;
        };
        let headers: Vec<String> = header_row.iter().map(cell_text).collect();

        for row in rows {
            if row.iter().all(|c| matches!(c, Data::Empty)) {
                continue;
            }
            let record: SpecRow = headers
                .iter()
                .zip(row.iter())
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header.clone(), Value::String(cell_text(cell))))
                .collect();
            rows_out.push(record);
        }
    }

    Ok(data)
}

/// 변환된 전체 행 수
pub fn total_rows(data: &SpecData) -> usize {
    [
        &data.slb_motor_specs,
        &data.slb960_dim,
        &data.slf_1p_220v_60hz,
        &data.slf_3p_220_380v_60hz,
        &data.slf_a_dimensions,
        &data.slf_d_dimensions,
        &data.controllers,
        &data.hood_sizes,
        &data.shutter_sizes,
        &data.inlet_summary,
    ]
    .iter()
    .map(|rows| rows.len())
    .sum()
}

/// 재원 문서를 JSON 파일로 저장
pub fn write_json(data: &SpecData, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(output, json)?;
    Ok(())
}
