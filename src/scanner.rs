//! Per-directory scanning for matching file names.

use crate::collection::StringList;
use crate::context::RunContext;
use crate::error::Result;
use crate::pattern::CompiledPattern;
use crate::reporter::format_unreadable;
use std::ffi::OsStr;
use std::fs::{self, DirEntry};
use std::io::{self, Write};
use tracing::{debug, trace};

/// What a single directory contributed.
#[derive(Debug)]
pub enum ScanOutcome {
    /// Matching entry names in enumeration order. Never empty.
    Matches(StringList),
    /// The directory was read but nothing matched.
    NoMatches,
    /// The directory could not be opened.
    Unreadable(io::Error),
}

impl ScanOutcome {
    /// Collapse to the matches, dropping the reason for an absent result.
    pub fn into_matches(self) -> Option<StringList> {
        match self {
            ScanOutcome::Matches(list) => Some(list),
            ScanOutcome::NoMatches | ScanOutcome::Unreadable(_) => None,
        }
    }
}

/// Scans one directory at a time against a compiled pattern.
pub struct DirectoryScanner<'a> {
    ctx: &'a RunContext,
    pattern: &'a CompiledPattern,
}

impl<'a> DirectoryScanner<'a> {
    pub fn new(ctx: &'a RunContext, pattern: &'a CompiledPattern) -> Self {
        Self { ctx, pattern }
    }

    /// Scan `dir` and report an open failure on `diag`.
    ///
    /// Returns `None` both when the directory could not be opened and when
    /// nothing matched.
    pub fn scan<W: Write>(&self, dir: &OsStr, diag: &mut W) -> Result<Option<StringList>> {
        Ok(self.scan_and_report(dir, diag)?.into_matches())
    }

    /// Like [`scan`](Self::scan) but keeps the reason for an absent result.
    pub fn scan_and_report<W: Write>(&self, dir: &OsStr, diag: &mut W) -> Result<ScanOutcome> {
        let outcome = self.scan_detailed(dir)?;
        if let ScanOutcome::Unreadable(err) = &outcome {
            writeln!(diag, "{}", format_unreadable(self.ctx, dir, err))?;
        }
        Ok(outcome)
    }

    /// Scan `dir` without writing anything, keeping the reason for an empty
    /// result. Entry names are kept byte for byte.
    pub fn scan_detailed(&self, dir: &OsStr) -> Result<ScanOutcome> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(?dir, error = %e, "Failed to open directory");
                return Ok(ScanOutcome::Unreadable(e));
            }
        };
        debug!(?dir, "Opened directory");

        let mut matched: Option<StringList> = None;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(?dir, error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };

            if is_dir(&entry) {
                continue;
            }

            let name = entry.file_name();
            if self.pattern.is_match(&name) {
                trace!(?dir, ?name, "Matched entry");
                matched = Some(StringList::append(matched, &name)?);
            }
        }

        Ok(match matched {
            Some(list) => ScanOutcome::Matches(list),
            None => ScanOutcome::NoMatches,
        })
    }
}

/// Whether the entry's own type is a directory. Symbolic links are reported
/// as links, so a link to a directory is not skipped.
fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_ok_and(|t| t.is_dir())
}
