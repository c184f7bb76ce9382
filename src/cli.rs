use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seongil-spec")]
#[command(about = "제품 재원표 변환·검증·조회 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 제품_재원표.xlsx 를 specs.json 으로 변환
    Convert {
        /// 재원표 엑셀 파일 경로
        #[arg(required = true)]
        xlsx: PathBuf,

        /// 출력 JSON 파일
        #[arg(short, long, default_value = "assets/data/specs.json")]
        output: PathBuf,
    },

    /// specs.json 문서 검사 (컬렉션 누락·키 중복)
    Validate {
        /// 입력 JSON 파일
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 한 레코드의 재원 카드를 터미널에 출력
    Show {
        /// 입력 JSON 파일
        #[arg(required = true)]
        input: PathBuf,

        /// 카테고리 탭 id (motor/fan/controllers/hood/shutter/inlet)
        #[arg(short, long, default_value = "motor")]
        category: String,

        /// 조회 키 (모델/형식/TYPE). 생략하면 첫 레코드
        #[arg(short, long)]
        key: Option<String>,

        /// 환기팬 상 구분 (1p/3p)
        #[arg(short, long, default_value = "1p")]
        phase: String,
    },
}
