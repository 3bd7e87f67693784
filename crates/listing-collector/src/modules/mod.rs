//! 파이프라인 단계 모듈.

pub mod chunk_writer;
pub mod extract;
pub mod fetch;
pub mod pipeline;

pub use chunk_writer::write_chunks;
pub use extract::extract;
pub use fetch::{fetch, ListingFetcher};
pub use pipeline::{merge_sources, run_all};
