// src/render/mod.rs
pub mod page;
pub mod panel;
pub mod styles;

pub use page::{PageView, page_href, render_page};
pub use panel::render_panel;
