//! Terminal formatter for tree lines
//!
//! `TreeFormatter` writes entries to stdout as they arrive from the walker.
//! Directory names are colored when color is enabled; the branch characters
//! and layout are fixed.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeOutput;

/// Streams `<prefix>├── <name>[/]` lines to stdout.
pub struct TreeFormatter {
    stdout: StandardStream,
    use_color: bool,
}

impl TreeFormatter {
    /// `use_color` is decided by the caller (TTY and environment probing
    /// happen there), so the stream is either fully on or fully off.
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
            use_color,
        }
    }
}

impl TreeOutput for TreeFormatter {
    fn entry(&mut self, prefix: &str, name: &str, is_dir: bool) -> io::Result<()> {
        write!(self.stdout, "{prefix}├── ")?;
        if is_dir {
            if self.use_color {
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(self.stdout, "{name}")?;
            if self.use_color {
                self.stdout.reset()?;
            }
            writeln!(self.stdout, "/")?;
        } else {
            writeln!(self.stdout, "{name}")?;
        }
        Ok(())
    }
}
