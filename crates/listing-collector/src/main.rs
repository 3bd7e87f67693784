//! Exchange listing merger CLI.

use clap::{Parser, Subcommand, ValueEnum};
use listing_collector::{modules, CollectorConfig, RunReport};
use listing_core::{init_logging, ListingError, LogConfig, LogFormat};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "listing-collector")]
#[command(about = "NSE/BSE listing merger", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// 로그 형식 (pretty, json, compact)
    #[arg(long, global = true, default_value = "compact")]
    log_format: String,

    /// 원격 CSV URL (기본: LISTING_SOURCE_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// 우선 거래소 원본 경로 (기본: PRIMARY_SOURCE_PATH)
    #[arg(long, global = true)]
    primary: Option<PathBuf>,

    /// 보조 거래소 원본 경로 (기본: SECONDARY_SOURCE_PATH)
    #[arg(long, global = true)]
    secondary: Option<PathBuf>,

    /// 출력 디렉토리 (기본: OUTPUT_DIR)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// 파일당 최대 심볼 수 (기본: CHUNK_SIZE)
    #[arg(short, long, global = true)]
    chunk_size: Option<usize>,

    /// 결과 요약 출력 형식
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// 전체 워크플로우 실행 (다운로드 → 추출 → 중복 제거 → 저장)
    Run,

    /// 우선 거래소 CSV 다운로드만 실행
    Fetch,

    /// 로컬 원본으로 병합만 실행 (다운로드 없음)
    Merge,
}

/// 결과 요약 출력 형식.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    /// 환경변수 설정 위에 CLI 인자를 덮어씁니다.
    fn apply_overrides(&self, config: &mut CollectorConfig) {
        if let Some(url) = &self.url {
            config.fetch.url = url.clone();
        }
        if let Some(path) = &self.primary {
            config.primary.path = path.clone();
        }
        if let Some(path) = &self.secondary {
            config.secondary.path = path.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
        if let Some(chunk_size) = self.chunk_size {
            config.output.chunk_size = chunk_size;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_format = cli.log_format.parse().unwrap_or_else(|e| {
        eprintln!("{}, falling back to compact", e);
        LogFormat::Compact
    });
    if let Err(e) = init_logging(LogConfig::new(cli.log_level.clone()).with_format(log_format)) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), ListingError> {
    let mut config = CollectorConfig::from_env()?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    tracing::debug!(?config, "설정 로드 완료");

    match cli.command {
        Commands::Run => {
            let report = modules::run_all(&config).await?;
            report.log_summary("run");
            print_report(&report, cli.format)?;
        }
        Commands::Fetch => {
            let bytes = modules::fetch(&config.fetch, &config.primary.path).await?;
            println!("{} bytes saved to {}", bytes, config.primary.path.display());
        }
        Commands::Merge => {
            let report = modules::merge_sources(&config).await?;
            report.log_summary("merge");
            print_report(&report, cli.format)?;
        }
    }

    Ok(())
}

fn print_report(report: &RunReport, format: OutputFormat) -> Result<(), ListingError> {
    match format {
        OutputFormat::Table => println!("{}", report.render_table()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| ListingError::Serialization(e.to_string()))?;
            println!("{}", json);
        }
    }
    Ok(())
}
