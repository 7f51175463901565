//! Run context threaded into components that emit diagnostics.

use std::ffi::OsString;
use std::path::Path;

/// Fallback program name when argv[0] is unavailable.
pub const DEFAULT_PROGRAM_NAME: &str = "fcmd";

/// Per-run values that diagnostics need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    program_name: String,
}

impl RunContext {
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
        }
    }

    /// Build a context from argv[0], used verbatim as the program name.
    pub fn from_arg0(arg0: Option<OsString>) -> Self {
        let name = arg0
            .filter(|a| !a.is_empty())
            .map(|a| Path::new(&a).display().to_string())
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());
        Self::new(name)
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_NAME)
    }
}
