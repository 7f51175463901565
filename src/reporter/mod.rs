//! Formatting of match lines and diagnostics.

pub mod terminal;

use crate::context::RunContext;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

pub use terminal::TerminalReporter;

/// Writes one match line, trailing newline included.
pub trait Reporter {
    fn write_match(&self, out: &mut dyn Write, segment: &OsStr, name: &OsStr) -> io::Result<()>;
}

/// Human-readable reason for an I/O failure, without the `(os error N)`
/// suffix that `io::Error` appends.
pub fn describe_io_error(err: &io::Error) -> String {
    let message = err.to_string();
    match message.rfind(" (os error ") {
        Some(idx) if message.ends_with(')') => message[..idx].to_string(),
        _ => message,
    }
}

/// `<program>: '<path>' <reason>` for a directory that could not be opened.
pub fn format_unreadable(ctx: &RunContext, path: &OsStr, err: &io::Error) -> String {
    format!(
        "{}: '{}' {}",
        ctx.program_name(),
        Path::new(path).display(),
        describe_io_error(err)
    )
}

/// `<program>: '<path>' no matches`, only emitted in verbose mode.
pub fn format_no_matches(ctx: &RunContext, path: &OsStr) -> String {
    format!(
        "{}: '{}' no matches",
        ctx.program_name(),
        Path::new(path).display()
    )
}

/// `<program>: <reason>` for a fatal error.
pub fn format_fatal(ctx: &RunContext, reason: &dyn std::fmt::Display) -> String {
    format!("{}: {}", ctx.program_name(), reason)
}
