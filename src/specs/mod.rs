// src/specs/mod.rs
//! # Page readers
//!
//! Each spec knows one page of the match source and how to pull the ground
//! truth out of its HTML. Specs are pure: they take a document string and
//! return plain structs, so they run offline against inline fixtures.
//!
//! ## What lives here
//! - **Selector choice and precedence** (class-based cells first, positional
//!   layout as the fallback).
//! - **Tolerant extraction** with the `core::html` helpers: case-insensitive
//!   tag blocks, tag stripping, entity and whitespace cleanup.
//!
//! ## What does **not** live here
//! - Fetching (plain HTTP or the headless browser) and caching. That is
//!   `scrape::*` and `store::*`.
//! - Settlement maths (`lines`) and presentation (`render`, `gui`).
//!
//! ## Typical call chain
//! ```text
//! GUI / server / CLI → scrape::collect_matches → core::net / core::browser
//!                                             ↘ specs::match_list::parse_doc
//!                    → scrape::analyze_match  → specs::analysis::parse_doc
//!                                             ↘ store::save_preview
//! ```
//!
//! ## Current specs
//! - `match_list` – fixture and result lists (`tr1_<id>` rows).
//! - `analysis` – the per-match head-to-head page (recent form and meetings).
pub mod analysis;
pub mod match_list;
