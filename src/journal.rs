//! Per-group transaction journal, ordered newest-first.

use crate::money::Money;
use std::collections::VecDeque;

/// One posted transaction: the member's name at posting time and the
/// signed amount. Entries are immutable once posted; a rename elsewhere
/// would not be reflected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Member name at time of posting
    pub user: String,

    /// Signed amount
    pub amount: Money,
}

/// A newest-first log of a group's transactions.
///
/// Backed by a deque so prepending is O(1) and the recent-N query is a
/// bounded walk from the front.
#[derive(Debug, Default)]
pub struct Journal {
    entries: VecDeque<Entry>,
}

impl Journal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Journal::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no transactions have been posted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends a transaction for `user`.
    pub fn post(&mut self, user: &str, amount: Money) {
        self.entries.push_front(Entry {
            user: user.to_string(),
            amount,
        });
    }

    /// Removes every entry posted for `user`, preserving the relative
    /// order of the rest. No-op if none match.
    pub fn remove_for_user(&mut self, user: &str) {
        self.entries.retain(|entry| entry.user != user);
    }

    /// Up to `n` most recent entries, newest first. Yields fewer when the
    /// journal is shorter, and nothing when it is empty.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Entry> {
        self.entries.iter().take(n)
    }
}
