use crate::reporter::Reporter;
use colored::Colorize;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

/// Prints matches as `<segment>/<name>`, optionally colored.
///
/// Both parts are written byte for byte. Coloring applies only when both are
/// valid UTF-8; other lines are printed plain.
pub struct TerminalReporter {
    color: bool,
}

impl TerminalReporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::plain()
    }
}

impl Reporter for TerminalReporter {
    fn write_match(&self, out: &mut dyn Write, segment: &OsStr, name: &OsStr) -> io::Result<()> {
        if self.color {
            if let (Some(segment), Some(name)) = (segment.to_str(), name.to_str()) {
                return writeln!(out, "{}/{}", segment.blue(), name.bold());
            }
        }
        out.write_all(segment.as_bytes())?;
        out.write_all(b"/")?;
        out.write_all(name.as_bytes())?;
        out.write_all(b"\n")
    }
}
