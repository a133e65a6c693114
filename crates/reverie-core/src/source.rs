//! Entry source seam
//!
//! Storage lives outside this crate. Whatever holds the entries (a database,
//! a sync layer, a fixture) implements [`EntrySource`] and hands the engine a
//! snapshot of one user's full history.

use crate::error::Result;
use crate::models::Entry;

/// Supplies a user's full entry history.
///
/// Contract: entry dates are calendar days (midnight-normalized), tags are
/// pre-split, and word counts are populated. [`Entry::new`] upholds all three
/// for entries built through it.
pub trait EntrySource {
    fn entries(&self) -> Result<Vec<Entry>>;
}

/// An in-memory entry source wrapping a caller-supplied snapshot
pub struct VecSource {
    entries: Vec<Entry>,
}

impl VecSource {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl EntrySource for VecSource {
    fn entries(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }
}
