//! 거래소 및 심볼 정의.
//!
//! 이 모듈은 상장 종목 목록에서 사용하는 타입을 정의합니다:
//! - `Exchange` - 지원하는 거래소 코드 (NSE, BSE)
//! - `Symbol` - `EXCHANGE:TICKER` 형식의 거래소 접두사가 붙은 심볼

use crate::error::{ListingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 지원하는 거래소 코드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// National Stock Exchange of India
    Nse,
    /// Bombay Stock Exchange
    Bse,
}

impl Exchange {
    /// 심볼 접두사로 쓰이는 거래소 코드.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Nse => "NSE",
            Self::Bse => "BSE",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Exchange {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "NSE" => Ok(Self::Nse),
            "BSE" => Ok(Self::Bse),
            other => Err(ListingError::Config(format!(
                "Unknown exchange code: {}. Use: NSE, BSE",
                other
            ))),
        }
    }
}

/// 티커가 `^[A-Z0-9&.]+$` 형식인지 확인합니다.
///
/// 소문자, 공백, 그 외 문장부호가 하나라도 있으면 거부합니다.
pub fn is_valid_ticker(ticker: &str) -> bool {
    !ticker.is_empty()
        && ticker
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'&' || b == b'.')
}

/// 거래소 접두사가 붙은 상장 심볼.
///
/// 표시 형식은 `NSE:TCS`처럼 `EXCHANGE:TICKER`입니다.
/// 거래소 간 중복 판정에는 접두사를 뺀 티커(`bare`)만 사용합니다.
/// 직렬화도 같은 문자열 형식을 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    exchange: Exchange,
    ticker: String,
}

impl Symbol {
    /// 티커를 검증한 뒤 새 심볼을 생성합니다.
    pub fn new(exchange: Exchange, ticker: impl Into<String>) -> Result<Self> {
        let ticker = ticker.into();
        if !is_valid_ticker(&ticker) {
            return Err(ListingError::InvalidSymbol(format!(
                "{}:{}",
                exchange, ticker
            )));
        }
        Ok(Self { exchange, ticker })
    }

    /// 거래소.
    pub fn exchange(&self) -> Exchange {
        self.exchange
    }

    /// 거래소 접두사를 제외한 티커.
    pub fn bare(&self) -> &str {
        &self.ticker
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.exchange, self.ticker)
    }
}

impl FromStr for Symbol {
    type Err = ListingError;

    /// "EXCHANGE:TICKER" 형식 문자열에서 심볼을 파싱합니다.
    fn from_str(s: &str) -> Result<Self> {
        let (exchange, ticker) = s
            .split_once(':')
            .ok_or_else(|| ListingError::InvalidSymbol(s.to_string()))?;
        let exchange = exchange
            .parse::<Exchange>()
            .map_err(|_| ListingError::InvalidSymbol(s.to_string()))?;
        Self::new(exchange, ticker)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ListingError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tickers() {
        assert!(is_valid_ticker("TCS"));
        assert!(is_valid_ticker("M&M"));
        assert!(is_valid_ticker("20MICRONS"));
        assert!(is_valid_ticker("NAM.INDIA"));
    }

    #[test]
    fn test_invalid_tickers() {
        assert!(!is_valid_ticker(""));
        assert!(!is_valid_ticker("rel"));
        assert!(!is_valid_ticker("Tcs"));
        assert!(!is_valid_ticker("TATA MOTORS"));
        assert!(!is_valid_ticker("ABC_D"));
        assert!(!is_valid_ticker("BAJAJ-AUTO"));
        assert!(!is_valid_ticker("\"TCS\""));
    }

    #[test]
    fn test_symbol_display() {
        let symbol = Symbol::new(Exchange::Nse, "TCS").unwrap();
        assert_eq!(symbol.to_string(), "NSE:TCS");
        assert_eq!(symbol.bare(), "TCS");
        assert_eq!(symbol.exchange(), Exchange::Nse);
    }

    #[test]
    fn test_symbol_rejects_invalid_ticker() {
        assert!(matches!(
            Symbol::new(Exchange::Bse, "rel"),
            Err(ListingError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn test_symbol_from_str() {
        let symbol: Symbol = "BSE:500325".parse().unwrap();
        assert_eq!(symbol.exchange(), Exchange::Bse);
        assert_eq!(symbol.bare(), "500325");

        assert!("TCS".parse::<Symbol>().is_err());
        assert!("NYSE:IBM".parse::<Symbol>().is_err());
        assert!("NSE:tcs".parse::<Symbol>().is_err());
    }

    #[test]
    fn test_exchange_from_str() {
        assert_eq!("nse".parse::<Exchange>().unwrap(), Exchange::Nse);
        assert_eq!(" BSE ".parse::<Exchange>().unwrap(), Exchange::Bse);
        assert!("LSE".parse::<Exchange>().is_err());
    }

    #[test]
    fn test_symbol_serde_uses_prefixed_string() {
        let symbol = Symbol::new(Exchange::Nse, "M&M").unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"NSE:M&M\"");

        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, symbol);

        assert!(serde_json::from_str::<Symbol>("\"NSE:m&m\"").is_err());
    }
}
