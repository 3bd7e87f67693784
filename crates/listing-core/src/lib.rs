//! # Listing Core
//!
//! 거래소 상장 종목 목록 병합기의 핵심 타입을 제공합니다:
//! - 거래소 코드 및 접두사가 붙은 심볼
//! - 티커 문자 집합 검증
//! - 거래소 간 중복 제거
//! - 에러 타입
//! - 로깅 초기화

pub mod dedup;
pub mod error;
pub mod logging;
pub mod types;

pub use dedup::{dedupe, merge};
pub use error::{ListingError, Result};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use types::*;
