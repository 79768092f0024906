//! Tree traversal and rendering.
//!
//! This module walks a directory tree depth-first, sorts each listing with
//! [`crate::sort::compare_names`], filters hidden entries, and prints one
//! line per entry with three spaces of indentation per level.
//!
//! # Example
//!
//! ```ignore
//! use std::io;
//! use treescope::tree::{TreeOptions, TreePrinter};
//!
//! let options = TreeOptions::new("./my-project").show_hidden(false);
//! let mut printer = TreePrinter::new(options, io::stdout().lock());
//! printer.print_tree()?;
//! ```

mod options;
mod render;

pub use options::TreeOptions;
pub use render::{is_hidden, TreePrinter};
