//! Orchestration of a run over every search-path segment.
//!
//! Fatal conditions are checked in order (missing search path, then pattern
//! compilation) before any directory is opened. Segments are processed left
//! to right with at most one open directory and one result list at a time.

use crate::collection::StringList;
use crate::config::SearchConfig;
use crate::context::RunContext;
use crate::error::{FcmdError, Result};
use crate::pattern::compile;
use crate::reporter::{Reporter, TerminalReporter, format_no_matches};
use crate::scanner::{DirectoryScanner, ScanOutcome};
use crate::tokenizer::tokenize;
use std::ffi::OsStr;
use std::io::Write;
use tracing::{debug, trace};

/// Phase of the driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Start,
    Opening,
    Scanning,
    Printing,
    Skipping,
    Done,
}

impl DriverState {
    /// Whether `next` may follow `self`.
    pub fn can_enter(self, next: DriverState) -> bool {
        use DriverState::*;
        matches!(
            (self, next),
            (Start, Opening)
                | (Start, Done)
                | (Opening, Scanning)
                | (Opening, Skipping)
                | (Scanning, Printing)
                | (Scanning, Skipping)
                | (Printing | Skipping, Opening)
                | (Printing | Skipping, Done)
        )
    }
}

/// Counters of a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub segments: usize,
    pub matches: usize,
    pub unreadable: usize,
    pub empty: usize,
}

pub struct Driver<'a> {
    ctx: &'a RunContext,
    config: &'a SearchConfig,
    reporter: TerminalReporter,
    state: DriverState,
}

impl<'a> Driver<'a> {
    pub fn new(ctx: &'a RunContext, config: &'a SearchConfig) -> Self {
        Self {
            ctx,
            config,
            reporter: TerminalReporter::new(config.color),
            state: DriverState::Start,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Run over `search_path`, the value of the configured variable.
    ///
    /// Matches go to `out` as `<segment>/<name>`; unreadable directories (and
    /// empty ones in verbose mode) are reported on `diag`. `out` is flushed
    /// after every printed segment so the two streams stay in segment order
    /// when they share a terminal.
    pub fn run<O: Write, D: Write>(
        &mut self,
        search_path: Option<&OsStr>,
        out: &mut O,
        diag: &mut D,
    ) -> Result<RunSummary> {
        let search_path = search_path.ok_or_else(|| FcmdError::MissingSearchPath {
            var: self.config.path_var.clone(),
        })?;

        let mut segments = tokenize(search_path, &self.config.delimiters);

        let pattern = match compile(&self.config.pattern, self.config.pattern_options) {
            Ok(pattern) => pattern,
            Err(e) => {
                segments.release()?;
                return Err(e.into());
            }
        };

        let scanner = DirectoryScanner::new(self.ctx, &pattern);
        let mut summary = RunSummary::default();
        let count = segments.count()?;
        debug!(var = %self.config.path_var, segments = count, "Searching path");

        for position in 1..=count {
            let segment = segments.element_at(position)?.unwrap_or_default();
            summary.segments += 1;

            self.enter(DriverState::Opening, segment);
            match scanner.scan_and_report(segment, diag)? {
                ScanOutcome::Matches(mut matched) => {
                    self.enter(DriverState::Scanning, segment);
                    self.enter(DriverState::Printing, segment);
                    summary.matches += self.print(segment, &matched, out)?;
                    out.flush()?;
                    matched.release()?;
                }
                ScanOutcome::NoMatches => {
                    self.enter(DriverState::Scanning, segment);
                    self.enter(DriverState::Skipping, segment);
                    summary.empty += 1;
                    if self.config.verbose {
                        writeln!(diag, "{}", format_no_matches(self.ctx, segment))?;
                    }
                }
                ScanOutcome::Unreadable(_) => {
                    self.enter(DriverState::Skipping, segment);
                    summary.unreadable += 1;
                }
            }
        }

        self.enter(DriverState::Done, OsStr::new(""));
        pattern.release();
        segments.release()?;
        out.flush()?;

        debug!(?summary, "Search finished");
        Ok(summary)
    }

    fn print<O: Write>(&self, segment: &OsStr, matched: &StringList, out: &mut O) -> Result<usize> {
        let names = if self.config.sort {
            matched.to_sorted()?
        } else {
            matched.to_vec()?
        };

        for name in &names {
            self.reporter.write_match(out, segment, name)?;
        }
        Ok(names.len())
    }

    fn enter(&mut self, next: DriverState, segment: &OsStr) {
        debug_assert!(
            self.state.can_enter(next),
            "illegal transition {:?} -> {:?}",
            self.state,
            next
        );
        trace!(from = ?self.state, to = ?next, ?segment, "Driver transition");
        self.state = next;
    }
}
