// src/scrape/mod.rs
mod scrape;
pub mod assemble;
pub mod legs;
pub mod segment;
pub mod summary;

pub use scrape::{collect, extract_records, ExtractStats, Extraction};
