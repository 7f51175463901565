#[cfg(not(unix))]
compile_error!("fcmd supports unix platforms only");

pub mod cli;
pub mod collection;
pub mod config;
pub mod context;
pub mod driver;
pub mod error;
pub mod pattern;
pub mod reporter;
pub mod scanner;
pub mod tokenizer;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, ColorChoice};
pub use collection::StringList;
pub use config::SearchConfig;
pub use context::RunContext;
pub use driver::{Driver, DriverState, RunSummary};
pub use error::{FcmdError, Result};
pub use pattern::{CompiledPattern, PatternError, PatternOptions, compile};
pub use reporter::{Reporter, TerminalReporter};
pub use scanner::{DirectoryScanner, ScanOutcome};
pub use tokenizer::tokenize;
