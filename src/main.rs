use clap::Parser;
use seongil_spec::{cli, convert, error, show, validate};

use cli::{Cli, Commands};
use error::{Result, SpecCliError};
use seongil_spec_common::{Catalog, Category, FanPhase, SpecData};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { xlsx, output } => {
            println!("📊 seongil-spec - 재원표 변환\n");

            println!("[1/2] 워크북 읽는 중...");
            let data = convert::convert_workbook(&xlsx)?;
            println!("✔ {}행 변환\n", convert::total_rows(&data));

            println!("[2/2] JSON 저장 중...");
            convert::write_json(&data, &output)?;
            println!("✔ 저장: {}", output.display());

            println!("\n✅ 변환 완료");
        }

        Commands::Validate { input } => {
            println!("🔍 seongil-spec - 문서 검사\n");

            let content = std::fs::read_to_string(&input)?;
            let data: SpecData = serde_json::from_str(&content)?;
            let findings = validate::validate_data(&data);

            if findings.is_empty() {
                println!("✅ 이상 없음");
            } else {
                for finding in &findings {
                    println!("- {finding}");
                }
                println!("\n⚠ {}건 확인 필요", findings.len());
            }
        }

        Commands::Show { input, category, key, phase } => {
            let content = std::fs::read_to_string(&input)?;
            let catalog = Catalog::from_json(&content)?;

            let category = Category::from_id(&category)
                .ok_or(SpecCliError::UnknownCategory(category))?;
            let phase =
                FanPhase::from_id(&phase).ok_or(SpecCliError::UnknownPhase(phase))?;

            print!("{}", show::render_text(&catalog, category, phase, key.as_deref()));
        }
    }

    Ok(())
}
