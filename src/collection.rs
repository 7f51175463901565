//! Ordered collection of owned strings.
//!
//! `StringList` holds PATH segments and per-directory match results. Order is
//! the order of insertion. Positions at the public boundary are 1-based: the
//! first element is at position 1.
//!
//! Elements are `OsString`s so that directory and file names that are not
//! valid UTF-8 survive unchanged.

use crate::error::{FcmdError, Result};
use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

/// Growable, order-preserving sequence of owned strings.
///
/// A list can be released exactly once. Every operation on a released list,
/// including a second `release`, returns [`FcmdError::InvalidState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringList {
    items: Vec<OsString>,
    released: bool,
}

impl StringList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `text` to `list`, creating a new single-element list
    /// when `list` is absent.
    pub fn append(list: Option<StringList>, text: impl AsRef<OsStr>) -> Result<StringList> {
        let mut list = list.unwrap_or_default();
        list.push(text)?;
        Ok(list)
    }

    /// Append a copy of `text` after all existing elements.
    pub fn push(&mut self, text: impl AsRef<OsStr>) -> Result<()> {
        self.ensure_live("append")?;
        self.items.push(text.as_ref().to_owned());
        Ok(())
    }

    /// Number of elements.
    pub fn count(&self) -> Result<usize> {
        self.ensure_live("count")?;
        Ok(self.items.len())
    }

    /// Number of elements of a possibly absent list. An absent list is misuse.
    pub fn count_of(list: Option<&StringList>) -> Result<usize> {
        match list {
            Some(list) => list.count(),
            None => Err(FcmdError::InvalidState(
                "count of an absent collection".to_string(),
            )),
        }
    }

    /// Element at 1-based `position`, or `None` when the position is out of
    /// range. Position 0 is always out of range.
    pub fn element_at(&self, position: usize) -> Result<Option<&OsStr>> {
        self.ensure_live("element_at")?;
        Ok(position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .map(OsString::as_os_str))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.items.iter().map(OsString::as_os_str)
    }

    /// Copy the elements into a flat vector, preserving order.
    pub fn to_vec(&self) -> Result<Vec<OsString>> {
        self.ensure_live("to_vec")?;
        Ok(self.items.clone())
    }

    /// Build a list from a flat vector, preserving order.
    pub fn from_vec(items: Vec<OsString>) -> Self {
        Self {
            items,
            released: false,
        }
    }

    /// Elements in ascending byte-wise order.
    ///
    /// Insertion sort over adjacent swaps: stable for equal elements and a
    /// no-op on already sorted input. The list itself is left untouched.
    pub fn to_sorted(&self) -> Result<Vec<OsString>> {
        let mut sorted = self.to_vec()?;
        for c in 1..sorted.len() {
            let mut d = c;
            while d > 0 && compare_bytes(&sorted[d], &sorted[d - 1]) == Ordering::Less {
                sorted.swap(d, d - 1);
                d -= 1;
            }
        }
        Ok(sorted)
    }

    /// Free every element. A second call reports misuse.
    pub fn release(&mut self) -> Result<()> {
        self.ensure_live("release")?;
        self.items = Vec::new();
        self.released = true;
        Ok(())
    }

    fn ensure_live(&self, operation: &str) -> Result<()> {
        if self.released {
            return Err(FcmdError::released(operation));
        }
        Ok(())
    }
}

impl<S: AsRef<OsStr>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().map(|s| s.as_ref().to_owned()).collect())
    }
}

fn compare_bytes(a: &OsStr, b: &OsStr) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}
