//! Depth-first tree rendering.
//!
//! The renderer prints the root's own name, then walks the tree with
//! `walkdir`, sorting each directory's listing case-insensitively and
//! pruning hidden entries before they are visited. Each line is indented
//! three spaces per level and colored by the level it is printed at.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

use walkdir::WalkDir;

use super::TreeOptions;
use crate::sort::compare_names;
use crate::ui::{color_for_depth, ColorPrinter, TreeColor, DEFAULT_COLOR_SEQUENCE};

/// Indentation emitted once per nesting level.
const INDENT: &str = "   ";

/// Line printed when the configured root is missing or not a directory.
const INVALID_ROOT_MESSAGE: &str = "Directory does not exist";

/// Returns true if `name` is hidden-marked.
///
/// The convention is a leading dot (Unix dotfiles), applied on every
/// platform; the Windows hidden attribute is not consulted. `walkdir`
/// never yields `.` or `..`, so those names do not reach this check
/// during traversal.
pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Prints a directory tree to an output stream.
///
/// Entries within each directory are ordered case-insensitively with a
/// code-point tie-break, hidden entries are filtered transitively when
/// configured, and lines cycle through a color sequence by depth.
///
/// # Example
///
/// ```ignore
/// use std::io;
/// use treescope::tree::{TreeOptions, TreePrinter};
///
/// let mut printer = TreePrinter::new(TreeOptions::new("."), io::stdout().lock());
/// printer.print_tree()?;
/// ```
pub struct TreePrinter<W: Write> {
    options: TreeOptions,
    colors: Vec<TreeColor>,
    out: ColorPrinter<W>,
}

impl<W: Write> TreePrinter<W> {
    /// Creates a printer using the default color sequence.
    pub fn new(options: TreeOptions, out: W) -> Self {
        Self::with_color_sequence(options, out, DEFAULT_COLOR_SEQUENCE.to_vec())
    }

    /// Creates a printer with a custom color sequence.
    ///
    /// An empty sequence falls back to the default cycle.
    pub fn with_color_sequence(
        options: TreeOptions,
        out: W,
        colors: Vec<TreeColor>,
    ) -> Self {
        let colors = if colors.is_empty() {
            DEFAULT_COLOR_SEQUENCE.to_vec()
        } else {
            colors
        };
        let out = if options.use_color {
            ColorPrinter::new(out)
        } else {
            ColorPrinter::uncolored(out)
        };
        Self {
            options,
            colors,
            out,
        }
    }

    /// Prints the tree rooted at the configured directory.
    ///
    /// A missing or non-directory root prints a single diagnostic line and
    /// returns `Ok(())`; the `Err` case covers write failures only.
    /// Subdirectories that cannot be listed (permissions, concurrent
    /// deletion) contribute no children and do not interrupt the rest of
    /// the traversal.
    pub fn print_tree(&mut self) -> io::Result<()> {
        if !self.options.root.is_dir() {
            self.out.println(INVALID_ROOT_MESSAGE)?;
            return self.out.flush();
        }

        // The root is the explicit starting point, not a discovered entry:
        // it is printed and descended even when its own name is hidden.
        let label = root_label(&self.options.root);
        self.print_entry(&label, true, 0)?;

        let show_hidden = self.options.show_hidden;
        let walker = WalkDir::new(&self.options.root)
            .min_depth(1)
            .sort_by(|a, b| {
                compare_names(
                    &a.file_name().to_string_lossy(),
                    &b.file_name().to_string_lossy(),
                )
            })
            .into_iter()
            .filter_entry(move |entry| show_hidden || !is_hidden(entry.file_name()));

        // Error entries mark unlistable directories; dropping them skips
        // the subtree while siblings keep printing.
        for entry in walker.filter_map(|e| e.ok()) {
            let name = entry.file_name().to_string_lossy();
            self.print_entry(&name, entry.file_type().is_dir(), entry.depth())?;
        }

        self.out.flush()
    }

    fn print_entry(&mut self, name: &str, is_dir: bool, depth: usize) -> io::Result<()> {
        self.out.set_color(color_for_depth(&self.colors, depth));
        let indent = INDENT.repeat(depth);
        if is_dir {
            self.out.println(&format!("{indent}{name}/"))
        } else {
            self.out.println(&format!("{indent}{name}"))
        }
    }
}

/// Resolves the name printed for the root line.
///
/// Roots like `.` or `..` have no final path component, so they are
/// canonicalized and the resolved directory's name is used instead.
fn root_label(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    match root.canonicalize() {
        Ok(resolved) => match resolved.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => resolved.display().to_string(),
        },
        Err(_) => root.display().to_string(),
    }
}
