// src/core/mod.rs

pub mod html;
pub mod sanitize;

pub use html::{HtmlCell, HtmlRow, HtmlTable};
