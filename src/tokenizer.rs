//! Splitting of PATH-like values into segments.

use crate::collection::StringList;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

/// Delimiter of the executable search path.
pub const PATH_DELIMITER: &str = ":";

/// Split `source` at every byte contained in `delimiters`.
///
/// Each maximal run between delimiters becomes one element, left to right.
/// Adjacent delimiters yield an empty element. An empty `source` yields an
/// empty list rather than a list holding one empty string.
///
/// Splitting works on raw bytes, so segments that are not valid UTF-8 are
/// kept as they are. Only ASCII delimiters are meaningful; the CLI rejects
/// any other.
pub fn tokenize(source: &OsStr, delimiters: &str) -> StringList {
    if source.is_empty() {
        return StringList::new();
    }

    let delimiters = delimiters.as_bytes();
    source
        .as_bytes()
        .split(|b| b.is_ascii() && delimiters.contains(b))
        .map(OsStr::from_bytes)
        .collect()
}
