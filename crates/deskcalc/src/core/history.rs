//! Calculation history
//!
//! Entries are rendered lines of the form `"5 + 3 = 8"`, kept in the order
//! they were produced. The log only grows by [`History::push`]; it can be
//! emptied or replaced wholesale, never edited in place.

use serde::{Deserialize, Serialize};

/// Ordered log of completed calculations (oldest first)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Records a finished calculation as `"<expression> = <result>"`
    pub fn record(&mut self, expression: &str, result: &str) {
        self.push(format!("{expression} = {result}"));
    }

    /// Replaces every entry, e.g. when hydrating from saved preferences
    pub fn replace(&mut self, entries: Vec<String>) {
        self.entries = entries;
    }

    /// Clears all history entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Exports history as one entry per line
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries.join("\n")
    }
}

impl From<Vec<String>> for History {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}
