//! 원격 상장 종목 CSV 다운로드.
//!
//! 응답 본문을 메모리에 모으지 않고 청크 단위로 바로 파일에 씁니다.
//! 실패 원인(네트워크, 타임아웃, 상태 코드)은 구분하지 않고 하나의
//! `ListingError::Fetch`로 보고하며 재시도하지 않습니다.

use crate::config::FetchConfig;
use listing_core::{ListingError, Result};
use reqwest::header::{ACCEPT, REFERER, USER_AGENT};
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// 상장 종목 CSV 다운로더.
pub struct ListingFetcher {
    client: reqwest::Client,
    referer: String,
    user_agent: String,
}

impl ListingFetcher {
    /// 설정으로 다운로더 생성.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ListingError::Fetch(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            client,
            referer: config.referer.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// `url`을 GET 요청하여 응답 본문을 `destination`에 저장합니다.
    ///
    /// 기존 파일은 덮어씁니다. 저장한 바이트 수를 반환합니다.
    pub async fn fetch(&self, url: &str, destination: &Path) -> Result<u64> {
        info!(url, destination = %destination.display(), "Downloading listing CSV");

        let mut response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(REFERER, &self.referer)
            .header(ACCEPT, "*/*")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| fetch_error(url, e))?;

        debug!(status = %response.status(), "Listing response received");

        let mut file = tokio::fs::File::create(destination)
            .await
            .map_err(|e| fetch_error(url, e))?;

        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await.map_err(|e| fetch_error(url, e))? {
            file.write_all(&chunk).await.map_err(|e| fetch_error(url, e))?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(|e| fetch_error(url, e))?;

        info!(bytes = written, "Listing CSV downloaded");
        Ok(written)
    }
}

fn fetch_error(url: &str, cause: impl std::fmt::Display) -> ListingError {
    ListingError::Fetch(format!("{}: {}", url, cause))
}

/// 설정된 URL에서 우선 거래소 원본을 한 번 다운로드합니다.
pub async fn fetch(config: &FetchConfig, destination: &Path) -> Result<u64> {
    ListingFetcher::new(config)?
        .fetch(&config.url, destination)
        .await
}
