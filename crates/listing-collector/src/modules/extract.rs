//! 상장 종목 CSV에서 심볼 추출.
//!
//! 파일을 한 줄씩 스트리밍으로 읽습니다. 첫 줄은 항상 헤더로 보고 건너뛰며,
//! 이후 각 줄의 첫 번째 필드만 티커 후보로 사용합니다.

use listing_core::{is_valid_ticker, Exchange, ListingError, Result, Symbol};
use std::collections::HashSet;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// `source`에서 유효한 티커를 추출해 `exchange` 접두사를 붙여 반환합니다.
///
/// - 첫 줄은 내용과 무관하게 건너뜁니다.
/// - 첫 쉼표 앞 필드를 trim한 값이 `^[A-Z0-9&.]+$`일 때만 채택합니다.
/// - 같은 티커는 처음 나온 것만 남기며 등장 순서를 유지합니다.
///
/// 파일이 없거나 읽는 중 오류가 나면 `ListingError::Read`를 반환하고
/// 부분 결과는 버립니다.
pub async fn extract(source: &Path, exchange: Exchange) -> Result<Vec<Symbol>> {
    let file = tokio::fs::File::open(source)
        .await
        .map_err(|e| ListingError::read(source, e))?;

    // '\n' 구간을 다시 '\r'로 나눠 LF, CRLF, 단독 CR 모두 줄 끝으로 처리
    let mut segments = BufReader::new(file).split(b'\n');

    let mut symbols = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut rejected = 0usize;
    let mut is_header = true;

    while let Some(segment) = segments
        .next_segment()
        .await
        .map_err(|e| ListingError::read(source, e))?
    {
        for line in logical_lines(&segment) {
            if is_header {
                is_header = false;
                continue;
            }

            let line = String::from_utf8_lossy(line);
            let ticker = first_field(&line);

            if !is_valid_ticker(ticker) {
                rejected += 1;
                continue;
            }
            if seen.contains(ticker) {
                continue;
            }

            seen.insert(ticker.to_string());
            symbols.push(Symbol::new(exchange, ticker)?);
        }
    }

    debug!(%exchange, rejected, "Rows rejected by ticker filter");
    info!("{} symbols collected: {}", exchange, symbols.len());

    Ok(symbols)
}

/// '\n'으로 끊은 구간 하나를 논리적인 줄들로 나눕니다.
///
/// 구간 끝의 '\r'은 CRLF의 일부이므로 빈 줄을 만들지 않습니다.
fn logical_lines(segment: &[u8]) -> impl Iterator<Item = &[u8]> {
    let segment = segment.strip_suffix(b"\r").unwrap_or(segment);
    segment.split(|&b| b == b'\r')
}

/// 첫 쉼표 앞 필드 (쉼표가 없으면 줄 전체), 앞뒤 공백 제거.
fn first_field(line: &str) -> &str {
    line.split(',').next().unwrap_or_default().trim()
}
