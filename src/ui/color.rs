//! Semantic colors and the depth-cycling rule.
//!
//! Colors are named values decoupled from their escape codes; the mapping
//! to terminal codes happens only when a line is written. Cycling is a pure
//! function of the depth, so it can be tested without a console.

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color;

/// A named terminal color used when printing tree entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

/// Color sequence used when no custom sequence is supplied.
///
/// Entries at depth `d` are printed in `DEFAULT_COLOR_SEQUENCE[d % 3]`.
pub const DEFAULT_COLOR_SEQUENCE: [TreeColor; 3] =
    [TreeColor::White, TreeColor::Purple, TreeColor::Yellow];

impl TreeColor {
    /// All recognized color names, in the order they parse.
    pub const ALL: [TreeColor; 8] = [
        TreeColor::Black,
        TreeColor::Red,
        TreeColor::Green,
        TreeColor::Yellow,
        TreeColor::Blue,
        TreeColor::Purple,
        TreeColor::Cyan,
        TreeColor::White,
    ];

    /// Returns the lowercase name this color parses from.
    pub fn name(self) -> &'static str {
        match self {
            TreeColor::Black => "black",
            TreeColor::Red => "red",
            TreeColor::Green => "green",
            TreeColor::Yellow => "yellow",
            TreeColor::Blue => "blue",
            TreeColor::Purple => "purple",
            TreeColor::Cyan => "cyan",
            TreeColor::White => "white",
        }
    }
}

impl From<TreeColor> for Color {
    fn from(color: TreeColor) -> Self {
        match color {
            TreeColor::Black => Color::Black,
            TreeColor::Red => Color::Red,
            TreeColor::Green => Color::Green,
            TreeColor::Yellow => Color::Yellow,
            TreeColor::Blue => Color::Blue,
            TreeColor::Purple => Color::Magenta,
            TreeColor::Cyan => Color::Cyan,
            TreeColor::White => Color::White,
        }
    }
}

impl fmt::Display for TreeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized color name: '{0}'")]
pub struct ParseColorError(String);

impl FromStr for TreeColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "black" => Ok(TreeColor::Black),
            "red" => Ok(TreeColor::Red),
            "green" => Ok(TreeColor::Green),
            "yellow" => Ok(TreeColor::Yellow),
            "blue" => Ok(TreeColor::Blue),
            "purple" | "magenta" => Ok(TreeColor::Purple),
            "cyan" => Ok(TreeColor::Cyan),
            "white" => Ok(TreeColor::White),
            other => Err(ParseColorError(other.to_string())),
        }
    }
}

/// Selects the color for an entry printed at the given depth.
///
/// The sequence is cycled: depth `d` maps to `sequence[d % sequence.len()]`.
/// An empty sequence yields [`TreeColor::White`] so the function is total,
/// though constructors guard against empty sequences before this is reached.
///
/// # Example
///
/// ```rust
/// use treescope::ui::{color_for_depth, TreeColor};
///
/// let seq = [TreeColor::White, TreeColor::Purple, TreeColor::Yellow];
/// assert_eq!(color_for_depth(&seq, 0), TreeColor::White);
/// assert_eq!(color_for_depth(&seq, 3), TreeColor::White);
/// assert_eq!(color_for_depth(&seq, 4), TreeColor::Purple);
/// ```
pub fn color_for_depth(sequence: &[TreeColor], depth: usize) -> TreeColor {
    if sequence.is_empty() {
        return TreeColor::White;
    }
    sequence[depth % sequence.len()]
}
