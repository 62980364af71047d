// src/gui/components/mod.rs
pub mod analysis_panel;
pub mod header;
pub mod match_list;
pub mod options;
