//! TreeScope - directory tree printer with depth-cycled terminal colors
//!
//! This crate renders a directory tree to a console, sorting entries
//! case-insensitively, indenting three spaces per level, and cycling
//! through a color sequence as nesting deepens.

pub mod sort;
pub mod tree;
pub mod ui;
