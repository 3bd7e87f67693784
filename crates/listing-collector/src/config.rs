//! 환경변수 기반 설정 모듈.

use listing_core::{Exchange, ListingError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// NSE 전종목 CSV 기본 URL.
pub const DEFAULT_SOURCE_URL: &str =
    "https://nsearchives.nseindia.com/content/equities/EQUITY_L.csv";

/// 기본 Referer (NSE는 기본 클라이언트 식별자를 거부함).
pub const DEFAULT_REFERER: &str = "https://www.nseindia.com/";

/// 기본 User-Agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// 출력 파일당 기본 심볼 수.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 다운로드 설정
    pub fetch: FetchConfig,
    /// 우선 거래소 원본 (다운로드 대상)
    pub primary: SourceConfig,
    /// 보조 거래소 원본 (로컬에 이미 존재해야 함)
    pub secondary: SourceConfig,
    /// 출력 설정
    pub output: OutputConfig,
}

/// 다운로드 설정
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// 원격 CSV URL
    pub url: String,
    /// Referer 헤더
    pub referer: String,
    /// User-Agent 헤더
    pub user_agent: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

/// 거래소 원본 파일 설정
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// 심볼 접두사로 쓰일 거래소
    pub exchange: Exchange,
    /// 원본 CSV 경로
    pub path: PathBuf,
}

/// 출력 설정
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// 출력 디렉토리
    pub dir: PathBuf,
    /// 파일당 최대 심볼 수
    pub chunk_size: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig {
                url: DEFAULT_SOURCE_URL.to_string(),
                referer: DEFAULT_REFERER.to_string(),
                user_agent: DEFAULT_USER_AGENT.to_string(),
                timeout_secs: 15,
            },
            primary: SourceConfig {
                exchange: Exchange::Nse,
                path: PathBuf::from("nse.csv"),
            },
            secondary: SourceConfig {
                exchange: Exchange::Bse,
                path: PathBuf::from("bse.csv"),
            },
            output: OutputConfig {
                dir: PathBuf::from("./files"),
                chunk_size: DEFAULT_CHUNK_SIZE,
            },
        }
    }
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드
    ///
    /// 설정되지 않은 값은 기본값을 사용합니다. 값이 있는데 파싱할 수 없으면
    /// (숫자 항목, 거래소 코드) `ListingError::Config`를 반환합니다.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            fetch: FetchConfig {
                url: env_var_or("LISTING_SOURCE_URL", defaults.fetch.url),
                referer: env_var_or("LISTING_REFERER", defaults.fetch.referer),
                user_agent: env_var_or("LISTING_USER_AGENT", defaults.fetch.user_agent),
                timeout_secs: env_var_parse(
                    "LISTING_FETCH_TIMEOUT_SECS",
                    defaults.fetch.timeout_secs,
                )?,
            },
            primary: SourceConfig {
                exchange: env_var_exchange("PRIMARY_EXCHANGE", defaults.primary.exchange)?,
                path: env_var_or("PRIMARY_SOURCE_PATH", defaults.primary.path),
            },
            secondary: SourceConfig {
                exchange: env_var_exchange("SECONDARY_EXCHANGE", defaults.secondary.exchange)?,
                path: env_var_or("SECONDARY_SOURCE_PATH", defaults.secondary.path),
            },
            output: OutputConfig {
                dir: env_var_or("OUTPUT_DIR", defaults.output.dir),
                chunk_size: env_var_parse("CHUNK_SIZE", defaults.output.chunk_size)?,
            },
        };

        Ok(config)
    }

    /// 설정 값 검증
    pub fn validate(&self) -> Result<()> {
        if self.output.chunk_size == 0 {
            return Err(ListingError::Config(
                "chunk size must be at least 1".to_string(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ListingError::Config(
                "fetch timeout must be at least 1 second".to_string(),
            ));
        }
        if self.primary.exchange == self.secondary.exchange {
            return Err(ListingError::Config(format!(
                "primary and secondary exchange are both {}",
                self.primary.exchange
            )));
        }
        Ok(())
    }
}

impl FetchConfig {
    /// 요청 타임아웃을 Duration으로 반환
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 환경변수에서 값을 파싱 (없으면 기본값, 파싱 실패 시 설정 에러)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| {
            ListingError::Config(format!("{} has an invalid value: {:?}", key, value))
        }),
        Err(_) => Ok(default),
    }
}

/// 환경변수 문자열 값 (없으면 기본값)
fn env_var_or<T: From<String>>(key: &str, default: T) -> T {
    std::env::var(key).map(T::from).unwrap_or(default)
}

/// 환경변수에서 거래소 코드 파싱
fn env_var_exchange(key: &str, default: Exchange) -> Result<Exchange> {
    match std::env::var(key) {
        Ok(value) => value.parse(),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CollectorConfig::default();

        assert_eq!(config.fetch.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.fetch.timeout(), Duration::from_secs(15));
        assert_eq!(config.primary.exchange, Exchange::Nse);
        assert_eq!(config.primary.path, PathBuf::from("nse.csv"));
        assert_eq!(config.secondary.exchange, Exchange::Bse);
        assert_eq!(config.secondary.path, PathBuf::from("bse.csv"));
        assert_eq!(config.output.chunk_size, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut config = CollectorConfig::default();
        config.output.chunk_size = 0;

        assert!(matches!(config.validate(), Err(ListingError::Config(_))));
    }

    #[test]
    fn test_same_exchange_rejected() {
        let mut config = CollectorConfig::default();
        config.secondary.exchange = Exchange::Nse;

        assert!(matches!(config.validate(), Err(ListingError::Config(_))));
    }

    #[test]
    fn test_env_var_parse_rejects_garbage() {
        std::env::set_var("LISTING_TEST_CHUNK", "not-a-number");
        match env_var_parse("LISTING_TEST_CHUNK", 1000usize) {
            Err(ListingError::Config(msg)) => assert!(msg.contains("LISTING_TEST_CHUNK")),
            other => panic!("expected config error, got {:?}", other),
        }

        std::env::set_var("LISTING_TEST_CHUNK", " 250 ");
        assert_eq!(env_var_parse("LISTING_TEST_CHUNK", 1000usize).unwrap(), 250);

        std::env::remove_var("LISTING_TEST_CHUNK");
        assert_eq!(env_var_parse("LISTING_TEST_CHUNK", 1000usize).unwrap(), 1000);
    }

    #[test]
    fn test_from_env_rejects_unparsable_values() {
        // from_env를 호출하는 테스트는 이것 하나뿐이라 공유 키를 써도 안전함
        std::env::set_var("CHUNK_SIZE", "ten");
        let err = CollectorConfig::from_env().unwrap_err();
        std::env::remove_var("CHUNK_SIZE");
        assert!(matches!(err, ListingError::Config(ref msg) if msg.contains("CHUNK_SIZE")));

        std::env::set_var("LISTING_FETCH_TIMEOUT_SECS", "abc");
        let err = CollectorConfig::from_env().unwrap_err();
        std::env::remove_var("LISTING_FETCH_TIMEOUT_SECS");
        assert!(
            matches!(err, ListingError::Config(ref msg) if msg.contains("LISTING_FETCH_TIMEOUT_SECS"))
        );
    }

    #[test]
    fn test_env_var_exchange() {
        std::env::set_var("LISTING_TEST_EXCHANGE", "bse");
        assert_eq!(
            env_var_exchange("LISTING_TEST_EXCHANGE", Exchange::Nse).unwrap(),
            Exchange::Bse
        );

        std::env::set_var("LISTING_TEST_EXCHANGE", "NASDAQ");
        assert!(env_var_exchange("LISTING_TEST_EXCHANGE", Exchange::Nse).is_err());

        std::env::remove_var("LISTING_TEST_EXCHANGE");
        assert_eq!(
            env_var_exchange("LISTING_TEST_EXCHANGE", Exchange::Nse).unwrap(),
            Exchange::Nse
        );
    }
}
