//! 상장 종목 목록의 기본 타입.

pub mod symbol;

pub use symbol::*;
