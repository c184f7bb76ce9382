use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecCliError {
    #[error("파일이 없습니다: {0}")]
    FileNotFound(String),

    #[error("엑셀 읽기 오류: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("재원 데이터 오류: {0}")]
    Catalog(#[from] seongil_spec_common::Error),

    #[error("지원하지 않는 카테고리: {0} (motor/fan/controllers/hood/shutter/inlet)")]
    UnknownCategory(String),

    #[error("지원하지 않는 상 구분: {0} (1p/3p)")]
    UnknownPhase(String),
}

pub type Result<T> = std::result::Result<T, SpecCliError>;
