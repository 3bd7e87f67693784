//! 실행 결과 요약.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// 출력 파일 하나의 기록 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkReport {
    /// 파일명 (예: "1.txt")
    pub file_name: String,
    /// 전체 경로
    pub path: PathBuf,
    /// 기록한 심볼 수
    pub symbol_count: usize,
}

/// 병합 실행 통계
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// 다운로드한 바이트 수 (다운로드를 건너뛰면 None)
    pub downloaded_bytes: Option<u64>,
    /// 우선 거래소 심볼 수
    pub primary_count: usize,
    /// 보조 거래소 심볼 수 (중복 제거 전)
    pub secondary_count: usize,
    /// 보조 거래소 심볼 수 (중복 제거 후)
    pub secondary_unique_count: usize,
    /// 병합된 전체 심볼 수
    pub total_merged: usize,
    /// 기록한 파일 목록 (기록 순서)
    pub chunks: Vec<ChunkReport>,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl RunReport {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 거래소 간 중복으로 제외된 보조 거래소 심볼 수
    pub fn cross_listed(&self) -> usize {
        self.secondary_count.saturating_sub(self.secondary_unique_count)
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            primary = self.primary_count,
            secondary = self.secondary_count,
            cross_listed = self.cross_listed(),
            total_merged = self.total_merged,
            files = self.chunks.len(),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "병합 완료"
        );
    }

    /// 파일별 심볼 수 표 형식 출력.
    pub fn render_table(&self) -> String {
        let width = self
            .chunks
            .iter()
            .map(|c| c.path.display().to_string().chars().count())
            .max()
            .unwrap_or(0)
            .max("FILE".len());

        let mut output = String::new();
        output.push_str(&format!("Total merged symbols: {}\n\n", self.total_merged));
        output.push_str(&format!("{:<width$}  {:>8}\n", "FILE", "SYMBOLS"));
        output.push_str(&"-".repeat(width + 10));
        output.push('\n');

        for chunk in &self.chunks {
            output.push_str(&format!(
                "{:<width$}  {:>8}\n",
                chunk.path.display().to_string(),
                chunk.symbol_count
            ));
        }

        output.push('\n');
        output.push_str(&format!("{} files written", self.chunks.len()));
        output
    }
}
