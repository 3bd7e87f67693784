//! 종목 목록 수집 파이프라인의 에러 타입.
//!
//! 모든 에러는 최상위까지 전파되어 실행을 즉시 중단시킵니다.
//! 재시도나 부분 성공 처리는 하지 않습니다.

use std::path::PathBuf;
use thiserror::Error;

/// 파이프라인 에러.
#[derive(Debug, Error)]
pub enum ListingError {
    /// 원격 소스 다운로드 실패 (네트워크, 타임아웃, 비정상 상태 코드)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// 원본 파일을 찾을 수 없거나 읽을 수 없음
    #[error("Read error: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 출력 디렉토리/파일 생성 또는 쓰기 실패
    #[error("Write error: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 설정 에러
    #[error("Configuration error: {0}")]
    Config(String),

    /// 직렬화 에러
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// 잘못된 심볼 문자열
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
}

impl ListingError {
    /// 읽기 에러를 생성합니다.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// 쓰기 에러를 생성합니다.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// 파이프라인 작업을 위한 Result 타입.
pub type Result<T> = std::result::Result<T, ListingError>;
