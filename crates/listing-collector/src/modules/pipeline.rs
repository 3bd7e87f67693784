//! 전체 워크플로우: 다운로드 → 추출 → 중복 제거 → 분할 저장.
//!
//! 각 단계는 이전 단계가 끝난 뒤에만 시작하며, 어느 단계든 실패하면
//! 그 자리에서 에러를 반환합니다.

use super::{chunk_writer, extract, fetch};
use crate::{CollectorConfig, RunReport};
use listing_core::{merge, Result};
use std::time::Instant;

/// 우선 거래소 원본을 내려받은 뒤 병합까지 실행합니다.
pub async fn run_all(config: &CollectorConfig) -> Result<RunReport> {
    let start = Instant::now();
    config.validate()?;

    tracing::info!("Step 1/2: downloading {} listing", config.primary.exchange);
    let bytes = fetch::fetch(&config.fetch, &config.primary.path).await?;

    tracing::info!("Step 2/2: merging symbols");
    let mut report = merge_sources(config).await?;
    report.downloaded_bytes = Some(bytes);
    report.elapsed = start.elapsed();

    Ok(report)
}

/// 로컬에 있는 두 원본으로 병합만 실행합니다 (다운로드 없음).
///
/// 보조 거래소 원본이 없으면 빈 목록으로 취급하지 않고 읽기 에러로 중단합니다.
pub async fn merge_sources(config: &CollectorConfig) -> Result<RunReport> {
    let start = Instant::now();
    config.validate()?;

    let mut report = RunReport::new();

    let primary = extract::extract(&config.primary.path, config.primary.exchange).await?;
    let secondary = extract::extract(&config.secondary.path, config.secondary.exchange).await?;
    report.primary_count = primary.len();
    report.secondary_count = secondary.len();

    // 우선 거래소 먼저, 중복 제거된 보조 거래소 나중
    let merged = merge(&primary, &secondary);
    report.secondary_unique_count = merged.len() - primary.len();
    tracing::info!(
        "{} symbols after removing duplicates: {}",
        config.secondary.exchange,
        report.secondary_unique_count
    );

    report.total_merged = merged.len();
    tracing::info!(total = merged.len(), "Total merged symbols");

    report.chunks =
        chunk_writer::write_chunks(&merged, config.output.chunk_size, &config.output.dir).await?;
    tracing::info!(
        files = report.chunks.len(),
        dir = %config.output.dir.display(),
        "Symbol files saved"
    );

    report.elapsed = start.elapsed();
    Ok(report)
}
