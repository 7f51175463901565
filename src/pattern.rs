//! Compilation and evaluation of the user's file-name pattern.
//!
//! Patterns use extended regular-expression syntax and are unanchored: a
//! name matches when the pattern matches anywhere inside it, unless the
//! pattern itself anchors with `^` and `$`.
//!
//! POSIX bracket expressions differ from the regex crate's classes: a
//! backslash inside brackets is a literal, `[` is not a nested class, and
//! `[.x.]`/`[=x=]` name single characters. Bracket expressions are rewritten
//! into the crate's syntax before compiling. Matching runs on raw bytes, so
//! names that are not valid UTF-8 are matched as they are.

use regex::bytes::{Regex, RegexBuilder};
use std::ffi::OsStr;
use std::iter::Peekable;
use std::os::unix::ffi::OsStrExt;
use std::str::Chars;
use thiserror::Error;
use tracing::debug;

/// Upper bound on the compiled program size.
const SIZE_LIMIT: usize = 10 * (1 << 20);

/// Options applied at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternOptions {
    pub ignore_case: bool,
}

impl PatternOptions {
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// Failure to compile a pattern.
#[derive(Error, Debug, Clone)]
pub enum PatternError {
    #[error("invalid pattern '{pattern}': {message}")]
    Syntax { pattern: String, message: String },

    #[error("pattern '{pattern}' is too large to compile (limit {limit} bytes)")]
    TooBig { pattern: String, limit: usize },
}

impl PatternError {
    fn syntax(pattern: &str, message: impl Into<String>) -> Self {
        PatternError::Syntax {
            pattern: pattern.to_string(),
            message: message.into(),
        }
    }

    fn from_regex(pattern: &str, err: regex::Error) -> Self {
        match err {
            regex::Error::CompiledTooBig(limit) => PatternError::TooBig {
                pattern: pattern.to_string(),
                limit,
            },
            other => PatternError::syntax(pattern, summarize(&other.to_string())),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            PatternError::Syntax { .. } => 4,
            PatternError::TooBig { .. } => 5,
        }
    }
}

/// Reduce the multi-line regex diagnostic to its `error:` line.
fn summarize(message: &str) -> String {
    message
        .lines()
        .rev()
        .find_map(|line| line.trim().strip_prefix("error:"))
        .map(|reason| reason.trim().to_string())
        .unwrap_or_else(|| message.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// One element of a bracket expression.
enum BracketItem {
    Char(char),
    Class(String),
}

/// Rewrite every POSIX bracket expression in `pattern` into regex crate
/// syntax. Text outside brackets is copied unchanged, escapes included.
fn translate(pattern: &str) -> Result<String, String> {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' => translate_bracket(&mut chars, &mut out)?,
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Translate a bracket expression whose opening `[` was already consumed.
fn translate_bracket(chars: &mut Peekable<Chars<'_>>, out: &mut String) -> Result<(), String> {
    out.push('[');
    if chars.next_if_eq(&'^').is_some() {
        out.push('^');
    }

    let mut first = true;
    loop {
        let c = chars
            .next()
            .ok_or_else(|| "unclosed bracket expression".to_string())?;
        if c == ']' && !first {
            out.push(']');
            return Ok(());
        }
        first = false;

        match bracket_item(c, chars)? {
            BracketItem::Class(name) => {
                out.push_str("[:");
                out.push_str(&name);
                out.push_str(":]");
            }
            BracketItem::Char(start) => {
                push_class_literal(out, start);
                if starts_range(chars) {
                    chars.next();
                    let c = chars
                        .next()
                        .ok_or_else(|| "unclosed bracket expression".to_string())?;
                    match bracket_item(c, chars)? {
                        BracketItem::Char(end) => {
                            out.push('-');
                            push_class_literal(out, end);
                        }
                        BracketItem::Class(name) => {
                            return Err(format!("character class [:{name}:] cannot end a range"));
                        }
                    }
                }
            }
        }
    }
}

/// Whether the next characters are `-` followed by something other than the
/// closing `]`.
fn starts_range(chars: &Peekable<Chars<'_>>) -> bool {
    let mut ahead = chars.clone();
    ahead.next() == Some('-') && ahead.next().is_some_and(|c| c != ']')
}

fn bracket_item(c: char, chars: &mut Peekable<Chars<'_>>) -> Result<BracketItem, String> {
    if c != '[' {
        return Ok(BracketItem::Char(c));
    }
    let kind = match chars.peek() {
        Some(&k @ (':' | '.' | '=')) => k,
        _ => return Ok(BracketItem::Char('[')),
    };
    chars.next();

    let mut body = String::new();
    loop {
        let n = chars
            .next()
            .ok_or_else(|| format!("unclosed [{kind} in bracket expression"))?;
        if n == kind && chars.next_if_eq(&']').is_some() {
            break;
        }
        body.push(n);
    }

    if kind == ':' {
        return Ok(BracketItem::Class(body));
    }
    let mut body_chars = body.chars();
    match (body_chars.next(), body_chars.next()) {
        (Some(single), None) => Ok(BracketItem::Char(single)),
        _ => Err(format!("unsupported collating element [{kind}{body}{kind}]")),
    }
}

fn push_class_literal(out: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '^' | '-' | '&' | '~') {
        out.push('\\');
    }
    out.push(c);
}

/// A pattern compiled once and reused for every directory entry.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    source: String,
}

impl CompiledPattern {
    /// Whether the pattern matches anywhere within `candidate`.
    pub fn is_match(&self, candidate: impl AsRef<OsStr>) -> bool {
        self.regex.is_match(candidate.as_ref().as_bytes())
    }

    /// The pattern as the user wrote it.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Free the compiled tables. Consuming `self` makes a second release
    /// impossible.
    pub fn release(self) {
        debug!(pattern = self.as_str(), "Releasing compiled pattern");
    }
}

/// Compile `pattern` with `options`.
pub fn compile(pattern: &str, options: PatternOptions) -> Result<CompiledPattern, PatternError> {
    let translated = translate(pattern).map_err(|message| PatternError::syntax(pattern, message))?;
    let regex = RegexBuilder::new(&translated)
        .case_insensitive(options.ignore_case)
        .size_limit(SIZE_LIMIT)
        .build()
        .map_err(|e| PatternError::from_regex(pattern, e))?;

    debug!(pattern, %translated, ignore_case = options.ignore_case, "Compiled pattern");
    Ok(CompiledPattern {
        regex,
        source: pattern.to_string(),
    })
}
