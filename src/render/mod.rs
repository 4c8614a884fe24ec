//! HTML fragments for the recipe widget.
//!
//! Rendering is pure: each function returns a complete fragment for one
//! region and the caller replaces the region's previous content with it.

mod cards;
mod detail;

pub use cards::render_cards;
pub use detail::render_detail;

use html_escape::{encode_double_quoted_attribute, encode_text};

fn text(value: &str) -> String {
    encode_text(value).into_owned()
}

fn attr(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}
