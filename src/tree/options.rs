//! Configuration for a tree rendering pass.

use std::path::PathBuf;

/// Options that determine how the tree is printed.
///
/// Supplied at construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Starting directory of the tree.
    pub root: PathBuf,
    /// Whether entries with hidden-marked names are included, transitively.
    pub show_hidden: bool,
    /// Whether output cycles colors by depth; when false no escape codes
    /// are emitted.
    pub use_color: bool,
}

impl TreeOptions {
    /// Creates options for the given root with hidden entries excluded and
    /// color enabled.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            show_hidden: false,
            use_color: true,
        }
    }

    /// Sets whether hidden entries are included.
    pub fn show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    /// Sets whether output is colored.
    pub fn use_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }
}
