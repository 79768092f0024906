//! Terminal output for TreeScope.
//!
//! This module provides the semantic color palette, the depth-to-color
//! cycling function, and the [`ColorPrinter`] that writes colored lines
//! to any output stream.

pub mod color;
mod printer;

pub use color::{color_for_depth, ParseColorError, TreeColor, DEFAULT_COLOR_SEQUENCE};
pub use printer::ColorPrinter;
