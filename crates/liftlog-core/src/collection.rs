//! Timestamp-ordered containers of log entries with day/floor partitioning.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::entry::LogEntry;

/// An ordered sequence of log entries, always sorted ascending by timestamp.
///
/// The sort is stable: entries with equal timestamps keep their insertion
/// order relative to each other. Entries are never mutated after
/// construction; every filter or split returns a new collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntryCollection {
    entries: Vec<LogEntry>,
}

impl LogEntryCollection {
    /// Builds a collection from entries in arbitrary order, sorting them
    /// ascending by timestamp.
    #[must_use]
    pub fn new(mut entries: Vec<LogEntry>) -> Self {
        entries.sort_by_key(|entry| entry.timestamp);
        Self { entries }
    }

    /// The entries in timestamp order.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Iterates the entries in timestamp order.
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The distinct calendar dates present in the collection.
    #[must_use]
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.entries.iter().map(LogEntry::date).collect()
    }

    /// The distinct floor numbers present in the collection, ignoring the
    /// direction sign.
    #[must_use]
    pub fn floors(&self) -> BTreeSet<i32> {
        self.entries.iter().map(|entry| entry.floor.number()).collect()
    }

    /// A new collection holding exactly the entries whose timestamp falls on
    /// `date`, relative order preserved.
    #[must_use]
    pub fn filter_by_date(&self, date: NaiveDate) -> Self {
        self.entries
            .iter()
            .filter(|entry| entry.date() == date)
            .cloned()
            .collect()
    }

    /// A new collection holding exactly the entries on the given floor.
    ///
    /// Sign-insensitive on both sides: an up call and a down call on the
    /// same landing belong to the same floor timeline.
    #[must_use]
    pub fn filter_by_floor(&self, floor: i32) -> Self {
        let number = floor.abs();
        self.entries
            .iter()
            .filter(|entry| entry.floor.number() == number)
            .cloned()
            .collect()
    }

    /// Partitions the collection by calendar date. Every entry appears in
    /// exactly one value.
    #[must_use]
    pub fn split_by_date(&self) -> BTreeMap<NaiveDate, Self> {
        self.dates()
            .into_iter()
            .map(|date| (date, self.filter_by_date(date)))
            .collect()
    }

    /// Partitions the collection by floor number. Every entry appears in
    /// exactly one value.
    #[must_use]
    pub fn split_by_floor(&self) -> BTreeMap<i32, Self> {
        self.floors()
            .into_iter()
            .map(|floor| (floor, self.filter_by_floor(floor)))
            .collect()
    }
}

impl FromIterator<LogEntry> for LogEntryCollection {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LogEntryCollection {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for LogEntryCollection {
    type Item = LogEntry;
    type IntoIter = std::vec::IntoIter<LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
