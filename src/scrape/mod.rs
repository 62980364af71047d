// src/scrape/mod.rs
mod analysis;
mod matches;

pub use analysis::{analyze_match, build_preview};
pub use matches::{collect_matches, collect_matches_with};
