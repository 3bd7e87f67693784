//! 병합된 심볼 목록을 고정 크기 파일로 분할 저장.

use crate::report::ChunkReport;
use listing_core::{ListingError, Result, Symbol};
use std::path::Path;
use tracing::debug;

/// `symbols`를 `chunk_size`개씩 나눠 `output_dir/1.txt`, `2.txt`, ...에 씁니다.
///
/// 각 파일은 심볼을 줄바꿈으로 이어 붙인 UTF-8 텍스트이며 같은 이름의
/// 파일은 덮어씁니다. 빈 목록이면 파일을 만들지 않습니다. 중간에 쓰기가
/// 실패하면 이미 기록한 파일은 그대로 남습니다.
pub async fn write_chunks(
    symbols: &[Symbol],
    chunk_size: usize,
    output_dir: &Path,
) -> Result<Vec<ChunkReport>> {
    if chunk_size == 0 {
        return Err(ListingError::Config(
            "chunk size must be at least 1".to_string(),
        ));
    }

    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| ListingError::write(output_dir, e))?;

    let mut reports = Vec::with_capacity(symbols.len().div_ceil(chunk_size));

    for (index, chunk) in symbols.chunks(chunk_size).enumerate() {
        let file_name = format!("{}.txt", index + 1);
        let path = output_dir.join(&file_name);

        let content = chunk
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| ListingError::write(&path, e))?;

        debug!(file = %path.display(), count = chunk.len(), "Chunk written");

        reports.push(ChunkReport {
            file_name,
            path,
            symbol_count: chunk.len(),
        });
    }

    Ok(reports)
}
