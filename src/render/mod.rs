//! Rendering helpers around the layout engine.
//!
//! - `BasicRenderer`: stock `BlockRenderer` producing HTML-shaped elements
//! - `HtmlWriter` / `render_html`: node sequence → HTML text

mod basic;
mod html;

pub use basic::{BasicRenderer, BULLET, DEFAULT_ORDERED_SEPARATOR};
pub use html::{render_html, render_html_with, HtmlConfig, HtmlWriter, DEFAULT_KEY_ATTR};
