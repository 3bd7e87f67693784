//! 거래소 간 중복 제거.
//!
//! 두 거래소에 동시 상장된 종목은 우선 거래소 쪽 심볼만 남깁니다.
//! 판정 키는 거래소 접두사를 뺀 티커입니다.

use crate::types::Symbol;
use std::collections::HashSet;

/// `secondary`에서 `primary`에 같은 티커가 있는 심볼을 제외합니다.
///
/// 남은 심볼의 상대 순서는 유지됩니다. 입력은 변경하지 않습니다.
pub fn dedupe(primary: &[Symbol], secondary: &[Symbol]) -> Vec<Symbol> {
    let primary_tickers: HashSet<&str> = primary.iter().map(Symbol::bare).collect();

    secondary
        .iter()
        .filter(|symbol| !primary_tickers.contains(symbol.bare()))
        .cloned()
        .collect()
}

/// 우선 거래소 심볼 뒤에 중복 제거된 보조 거래소 심볼을 이어 붙입니다.
pub fn merge(primary: &[Symbol], secondary: &[Symbol]) -> Vec<Symbol> {
    let filtered = dedupe(primary, secondary);
    let mut merged = Vec::with_capacity(primary.len() + filtered.len());
    merged.extend_from_slice(primary);
    merged.extend(filtered);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Exchange;
    use proptest::prelude::*;

    fn nse(ticker: &str) -> Symbol {
        Symbol::new(Exchange::Nse, ticker).unwrap()
    }

    fn bse(ticker: &str) -> Symbol {
        Symbol::new(Exchange::Bse, ticker).unwrap()
    }

    #[test]
    fn test_cross_listed_symbol_removed() {
        let primary = vec![nse("TCS")];
        let secondary = vec![bse("TCS")];

        assert!(dedupe(&primary, &secondary).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let primary = vec![nse("INFY"), nse("TCS")];
        let secondary = vec![bse("500325"), bse("TCS"), bse("532540"), bse("INFY"), bse("M&M")];

        let filtered = dedupe(&primary, &secondary);
        let tickers: Vec<&str> = filtered.iter().map(Symbol::bare).collect();
        assert_eq!(tickers, vec!["500325", "532540", "M&M"]);
        assert!(filtered.iter().all(|s| s.exchange() == Exchange::Bse));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(dedupe(&[], &[]).is_empty());
        assert!(dedupe(&[nse("TCS")], &[]).is_empty());
        assert_eq!(dedupe(&[], &[bse("TCS")]), vec![bse("TCS")]);
    }

    #[test]
    fn test_merge_puts_primary_first() {
        let primary = vec![nse("TCS"), nse("INFY")];
        let secondary = vec![bse("500325"), bse("TCS")];

        let merged: Vec<String> = merge(&primary, &secondary)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(merged, vec!["NSE:TCS", "NSE:INFY", "BSE:500325"]);
    }

    fn tickers() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-Z0-9&.]{1,4}", 0..40)
    }

    proptest! {
        #[test]
        fn prop_dedupe_never_keeps_primary_ticker(p in tickers(), s in tickers()) {
            let primary: Vec<Symbol> = p.iter().map(|t| nse(t)).collect();
            let secondary: Vec<Symbol> = s.iter().map(|t| bse(t)).collect();

            let filtered = dedupe(&primary, &secondary);
            for symbol in &filtered {
                prop_assert!(!p.iter().any(|t| t == symbol.bare()));
            }
        }

        #[test]
        fn prop_dedupe_is_ordered_subsequence(p in tickers(), s in tickers()) {
            let primary: Vec<Symbol> = p.iter().map(|t| nse(t)).collect();
            let secondary: Vec<Symbol> = s.iter().map(|t| bse(t)).collect();

            let filtered = dedupe(&primary, &secondary);
            let mut rest = secondary.iter();
            for symbol in &filtered {
                prop_assert!(rest.any(|candidate| candidate == symbol));
            }

            let expected = secondary
                .iter()
                .filter(|symbol| !p.iter().any(|t| t == symbol.bare()))
                .count();
            prop_assert_eq!(filtered.len(), expected);
        }
    }
}
