//! Colored line output over any writer.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};

use super::color::TreeColor;

/// Writes text in a current color, resetting the terminal after each write.
///
/// The printer holds a current [`TreeColor`]; every `print`/`println` emits
/// the color code, the text, and a reset, so no color state leaks between
/// writes. When color is disabled the text goes out bare, with no escape
/// codes at all.
///
/// The writer is generic so tests can capture output in a `Vec<u8>`.
#[derive(Debug)]
pub struct ColorPrinter<W: Write> {
    out: W,
    enabled: bool,
    current: TreeColor,
}

impl<W: Write> ColorPrinter<W> {
    /// Creates a printer that emits color codes.
    pub fn new(out: W) -> Self {
        Self {
            out,
            enabled: true,
            current: TreeColor::White,
        }
    }

    /// Creates a printer that writes plain text only.
    pub fn uncolored(out: W) -> Self {
        Self {
            out,
            enabled: false,
            current: TreeColor::White,
        }
    }

    /// Sets the color used by subsequent writes.
    pub fn set_color(&mut self, color: TreeColor) {
        self.current = color;
    }

    /// Returns the color subsequent writes will use.
    pub fn current_color(&self) -> TreeColor {
        self.current
    }

    /// Writes `text` in the current color, without a trailing newline.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.write_colored(text, false)
    }

    /// Writes `text` in the current color, followed by a newline.
    ///
    /// The newline is written after the color reset so the escape codes
    /// wrap exactly the visible text.
    pub fn println(&mut self, text: &str) -> io::Result<()> {
        self.write_colored(text, true)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn write_colored(&mut self, text: &str, newline: bool) -> io::Result<()> {
        if self.enabled {
            queue!(
                self.out,
                SetForegroundColor(self.current.into()),
                Print(text),
                ResetColor
            )?;
        } else {
            write!(self.out, "{text}")?;
        }
        if newline {
            writeln!(self.out)?;
        }
        Ok(())
    }
}
