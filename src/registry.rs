//! Ordered member registry: a singly-linked list sorted by ascending balance.
//!
//! The list lives in an index-based arena (a `Vec` of slots with a free
//! list), so splicing never touches raw pointers: nodes reference their
//! successor by slot index and removal recycles the slot.
//!
//! # Invariants
//!
//! - Member names are unique within a registry.
//! - The list is ordered by non-decreasing balance, subject to the two
//!   documented exceptions below.
//!
//! # Ordering contract
//!
//! Two behaviors are deliberate and documented rather than corrected:
//!
//! - New members are always inserted at the front. A fresh balance of zero
//!   sorts at or below every non-negative balance, so this is an O(1)
//!   sorted insert in the common case; if members with negative balances
//!   exist the new member lands above them until transactions reorder it.
//! - [`UserRegistry::post_amount`] restores order with **at most one
//!   adjacent swap** per call. A single posting can only disorder the
//!   changed member relative to its immediate successor, and that is the
//!   only pair the swap fixes; a balance that overtakes several successors
//!   moves one position now and the rest on later postings.

use crate::error::{LedgerError, Result};
use crate::money::Money;

/// One member slot in the arena.
#[derive(Debug)]
struct Node {
    name: String,
    balance: Money,
    next: Option<usize>,
}

/// Where a member sits in the list, expressed through its predecessor.
///
/// Singly-linked removal and reposition both need the link *into* the node,
/// so the locate primitive reports the predecessor rather than the node,
/// or the node itself when it is the head and the link is the head pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    /// The matching member is first in the list; holds its own slot index.
    Head(usize),
    /// Slot index of the member immediately before the match.
    Before(usize),
}

/// An insertion-ordered arena of members kept sorted by ascending balance.
#[derive(Debug, Default)]
pub struct UserRegistry {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
}

impl UserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        UserRegistry::default()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Returns `true` if the registry has no members.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` if a member with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find_prev(name).is_some()
    }

    // Slot accessors. Indices come only from the head pointer and `next`
    // links, which point at live slots by construction.
    fn node(&self, idx: usize) -> &Node {
        self.slots[idx].as_ref().expect("linked slot is live")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        self.slots[idx].as_mut().expect("linked slot is live")
    }

    /// Finds the predecessor of the member named `name`.
    ///
    /// Returns [`Prev::Head`] when the match is first (there is no prior
    /// node; the incoming link is the head pointer), [`Prev::Before`] with
    /// the predecessor's index otherwise, `None` if no member matches.
    fn find_prev(&self, name: &str) -> Option<Prev> {
        let head = self.head?;
        if self.node(head).name == name {
            return Some(Prev::Head(head));
        }
        let mut prev = head;
        while let Some(cur) = self.node(prev).next {
            if self.node(cur).name == name {
                return Some(Prev::Before(prev));
            }
            prev = cur;
        }
        None
    }

    /// Resolves a locate result to the matching member's slot index.
    fn target_of(&self, prev: Prev) -> usize {
        match prev {
            Prev::Head(idx) => idx,
            Prev::Before(p) => self.node(p).next.expect("predecessor has a successor"),
        }
    }

    /// Adds a member with a zero balance at the front of the list.
    ///
    /// Fails with [`LedgerError::UserExists`] if the name is taken. See the
    /// module docs for why front insertion is the sorted position.
    pub fn add_user(&mut self, name: &str) -> Result<()> {
        if self.contains(name) {
            return Err(LedgerError::UserExists(name.to_string()));
        }

        let node = Node {
            name: name.to_string(),
            balance: Money::ZERO,
            next: self.head,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.head = Some(idx);
        Ok(())
    }

    /// Removes the member named `name`, splicing it out of the list.
    ///
    /// The caller is responsible for cascading removal of the member's
    /// transactions (see `Group::remove_user`).
    pub fn remove_user(&mut self, name: &str) -> Result<()> {
        let prev = self
            .find_prev(name)
            .ok_or_else(|| LedgerError::UserNotFound(name.to_string()))?;

        let idx = self.target_of(prev);
        let after = self.node(idx).next;
        match prev {
            Prev::Head(_) => self.head = after,
            Prev::Before(p) => self.node_mut(p).next = after,
        }
        self.slots[idx] = None;
        self.free.push(idx);
        Ok(())
    }

    /// Adds `delta` to the member's balance, then repositions with at most
    /// one adjacent swap.
    ///
    /// Only the changed member can be out of order, and only relative to
    /// its immediate successor; if its new balance exceeds the successor's,
    /// the two swap and the head pointer is updated when the member was
    /// first. See the module-level ordering contract.
    pub fn post_amount(&mut self, name: &str, delta: Money) -> Result<()> {
        let prev = self
            .find_prev(name)
            .ok_or_else(|| LedgerError::UserNotFound(name.to_string()))?;
        let idx = self.target_of(prev);

        self.node_mut(idx).balance += delta;

        let Some(next) = self.node(idx).next else {
            return Ok(());
        };
        if self.node(idx).balance <= self.node(next).balance {
            return Ok(());
        }

        // Swap forward past the successor: prev -> next -> idx -> rest.
        let after = self.node(next).next;
        self.node_mut(next).next = Some(idx);
        self.node_mut(idx).next = after;
        match prev {
            Prev::Head(_) => self.head = Some(next),
            Prev::Before(p) => self.node_mut(p).next = Some(next),
        }
        Ok(())
    }

    /// Iterates (name, balance) pairs in list order, lowest payer first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> + '_ {
        std::iter::successors(self.head, move |&idx| self.node(idx).next).map(move |idx| {
            let node = self.node(idx);
            (node.name.as_str(), node.balance)
        })
    }

    /// Point lookup of one member's balance.
    pub fn balance(&self, name: &str) -> Result<Money> {
        let prev = self
            .find_prev(name)
            .ok_or_else(|| LedgerError::UserNotFound(name.to_string()))?;
        Ok(self.node(self.target_of(prev)).balance)
    }

    /// Members tied for the minimum balance, in list order.
    ///
    /// The threshold is the head member's balance: everyone at or below it
    /// is reported. Fails with [`LedgerError::EmptyRegistry`] if the group
    /// has no members.
    pub fn under_paid(&self) -> Result<Vec<(&str, Money)>> {
        let head = self.head.ok_or(LedgerError::EmptyRegistry)?;
        let floor = self.node(head).balance;
        Ok(self.iter().filter(|&(_, balance)| balance <= floor).collect())
    }
}
