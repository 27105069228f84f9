//! The pitch page: fixed content and its HTML rendering

pub mod content;
mod markup;
pub mod render;

pub use render::{render_page, PageRenderer};
