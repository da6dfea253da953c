//! A named expense group: one member registry plus one transaction journal.
//!
//! The group is the ownership boundary: it exclusively owns its members and
//! their transactions, and the two-step operations that span registry and
//! journal (posting, cascading removal) live here rather than as side
//! effects inside either structure.

use crate::error::Result;
use crate::journal::{Entry, Journal};
use crate::money::Money;
use crate::registry::UserRegistry;

/// A shared-expense group.
#[derive(Debug)]
pub struct Group {
    name: String,
    registry: UserRegistry,
    journal: Journal,
}

impl Group {
    /// Creates an empty group with the given name.
    pub fn new(name: &str) -> Self {
        Group {
            name: name.to_string(),
            registry: UserRegistry::new(),
            journal: Journal::new(),
        }
    }

    /// The group's immutable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a member with a zero balance.
    pub fn add_user(&mut self, user: &str) -> Result<()> {
        self.registry.add_user(user)
    }

    /// Posts a signed transaction for `user`.
    ///
    /// Verifies the member exists, appends the journal entry (newest
    /// first), then applies the balance update and single-step reposition.
    /// Fails with `UserNotFound` before anything is recorded.
    pub fn post_xct(&mut self, user: &str, amount: Money) -> Result<()> {
        // Check membership up front so a failed post leaves no journal entry.
        self.registry.balance(user)?;
        self.journal.post(user, amount);
        self.registry.post_amount(user, amount)
    }

    /// Removes a member and cascades removal of all their transactions.
    ///
    /// Unlinks from the registry first; a `UserNotFound` failure leaves the
    /// journal untouched.
    pub fn remove_user(&mut self, user: &str) -> Result<()> {
        self.registry.remove_user(user)?;
        self.journal.remove_for_user(user);
        Ok(())
    }

    /// (name, balance) pairs in list order, lowest payer first.
    pub fn list_users(&self) -> impl Iterator<Item = (&str, Money)> + '_ {
        self.registry.iter()
    }

    /// One member's balance.
    pub fn user_balance(&self, user: &str) -> Result<Money> {
        self.registry.balance(user)
    }

    /// Members tied for the minimum balance; fails on an empty group.
    pub fn under_paid(&self) -> Result<Vec<(&str, Money)>> {
        self.registry.under_paid()
    }

    /// Up to `n` most recent transactions, newest first.
    pub fn recent_xct(&self, n: usize) -> impl Iterator<Item = &Entry> {
        self.journal.recent(n)
    }
}
