//! Effective search settings after merging CLI flags and environment.

use crate::cli::{Cli, ColorChoice};
use crate::pattern::PatternOptions;
use crate::tokenizer::PATH_DELIMITER;
use std::io::IsTerminal;

/// Default environment variable holding the search path.
pub const DEFAULT_PATH_VAR: &str = "PATH";

/// Settings of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub pattern: String,
    pub path_var: String,
    pub delimiters: String,
    pub pattern_options: PatternOptions,
    pub sort: bool,
    pub verbose: bool,
    pub color: bool,
}

impl SearchConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            path_var: DEFAULT_PATH_VAR.to_string(),
            delimiters: PATH_DELIMITER.to_string(),
            pattern_options: PatternOptions::default(),
            sort: false,
            verbose: false,
            color: false,
        }
    }

    /// Merge parsed arguments. `auto` color resolves against stdout.
    pub fn from_cli(cli: &Cli) -> Self {
        let color = match cli.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        };

        Self {
            pattern: cli.pattern.clone(),
            path_var: cli.path_var.clone(),
            delimiters: cli.delimiter.clone(),
            pattern_options: PatternOptions::default().with_ignore_case(cli.ignore_case),
            sort: cli.sort,
            verbose: cli.verbose,
            color,
        }
    }

    pub fn with_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.pattern_options = self.pattern_options.with_ignore_case(ignore_case);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_new_defaults() {
        let config = SearchConfig::new("^ls$");
        assert_eq!(config.path_var, "PATH");
        assert_eq!(config.delimiters, ":");
        assert!(!config.pattern_options.ignore_case);
        assert!(!config.sort);
        assert!(!config.color);
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "fcmd", "--var", "MYPATH", "-d", ";", "-i", "-s", "-v", "--color", "always", "x",
        ])
        .unwrap();
        let config = SearchConfig::from_cli(&cli);
        assert_eq!(config.pattern, "x");
        assert_eq!(config.path_var, "MYPATH");
        assert_eq!(config.delimiters, ";");
        assert!(config.pattern_options.ignore_case);
        assert!(config.sort);
        assert!(config.verbose);
        assert!(config.color);
    }

    #[test]
    fn test_from_cli_color_never() {
        let cli = Cli::try_parse_from(["fcmd", "--color", "never", "x"]).unwrap();
        assert!(!SearchConfig::from_cli(&cli).color);
    }
}
