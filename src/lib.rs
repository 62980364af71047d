// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod lines;
pub mod preview;
pub mod progress;
pub mod render;
pub mod scrape;
pub mod specs;
pub mod store;

#[cfg(feature = "gui")]
pub mod gui;
pub mod server;
