//! Exchange listing merger.
//!
//! 이 crate는 두 거래소의 상장 종목 목록을 병합하는 바이너리를 제공합니다:
//! - 우선 거래소 CSV 다운로드 (NSE)
//! - 원본 CSV에서 티커 추출 및 거래소 접두사 부여
//! - 보조 거래소(BSE) 목록에서 중복 상장 종목 제거
//! - 병합 결과를 고정 크기 텍스트 파일로 분할 저장

pub mod config;
pub mod modules;
pub mod report;

pub use config::CollectorConfig;
pub use report::{ChunkReport, RunReport};
