//! # Expense Groups
//!
//! An in-memory shared-expense ledger: named groups of members, each with a
//! running balance and a newest-first transaction journal, where members
//! stay ordered by ascending balance so "who has under-paid" is a prefix
//! scan.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: 2 display decimals via `rust_decimal`
//! - **Sorted-by-balance registry**: arena-backed singly-linked list with
//!   predecessor-based splicing and a one-adjacent-swap reposition per
//!   posted transaction
//! - **Explicit cascades**: removing a member is a two-step orchestration
//!   (unlink, then purge journal), never an implicit side effect
//! - **Errors as values**: duplicates, not-found and empty-group queries
//!   are ordinary `Err` results, never panics
//!
//! ## Example
//!
//! ```no_run
//! use expense_groups::LedgerEngine;
//! use std::io::Cursor;
//!
//! let script = "op,group,user,amount\nadd_group,trip,,\n";
//! let mut engine = LedgerEngine::new();
//! let mut out = Vec::new();
//! engine.process_csv(Cursor::new(script), &mut out).unwrap();
//! ```

pub mod catalog;
pub mod command;
pub mod engine;
pub mod error;
pub mod group;
pub mod journal;
pub mod money;
pub mod registry;

pub use catalog::GroupCatalog;
pub use command::{Command, CommandRecord};
pub use engine::LedgerEngine;
pub use error::{LedgerError, Result};
pub use group::Group;
pub use journal::{Entry, Journal};
pub use money::Money;
pub use registry::UserRegistry;
