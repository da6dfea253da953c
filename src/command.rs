//! Command models for CSV script parsing.
//!
//! A script is a CSV stream with an `op,group,user,amount` header. Fields
//! that an operation does not use are left empty; `recent_xct` reuses the
//! `amount` column for its count.

use crate::money::Money;
use serde::Deserialize;
use std::str::FromStr;

/// Raw command record as read from a script row.
///
/// Uses string-based parsing for flexibility; all fields except `op` are
/// optional because most operations use only a subset.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    /// Operation name: add_group, list_groups, add_user, list_users,
    /// remove_user, user_balance, under_paid, add_xct, recent_xct
    pub op: String,

    /// Group name (all operations except list_groups)
    pub group: Option<String>,

    /// Member name (member-scoped operations)
    pub user: Option<String>,

    /// Signed amount for add_xct; entry count for recent_xct
    pub amount: Option<String>,
}

impl CommandRecord {
    /// Parses the raw record into a typed command.
    ///
    /// Returns `None` if the record is invalid (unknown op, missing field,
    /// unparseable amount or count).
    pub fn parse(&self) -> Option<Command> {
        let op = self.op.trim().to_lowercase();

        match op.as_str() {
            "add_group" => Some(Command::AddGroup {
                group: self.group_field()?,
            }),
            "list_groups" => Some(Command::ListGroups),
            "add_user" => Some(Command::AddUser {
                group: self.group_field()?,
                user: self.user_field()?,
            }),
            "list_users" => Some(Command::ListUsers {
                group: self.group_field()?,
            }),
            "remove_user" => Some(Command::RemoveUser {
                group: self.group_field()?,
                user: self.user_field()?,
            }),
            "user_balance" => Some(Command::UserBalance {
                group: self.group_field()?,
                user: self.user_field()?,
            }),
            "under_paid" => Some(Command::UnderPaid {
                group: self.group_field()?,
            }),
            "add_xct" => Some(Command::AddXct {
                group: self.group_field()?,
                user: self.user_field()?,
                amount: self.parse_amount()?,
            }),
            "recent_xct" => Some(Command::RecentXct {
                group: self.group_field()?,
                count: self.parse_count()?,
            }),
            _ => None,
        }
    }

    fn group_field(&self) -> Option<String> {
        non_empty(self.group.as_deref())
    }

    fn user_field(&self) -> Option<String> {
        non_empty(self.user.as_deref())
    }

    /// Parses the amount field into a `Money`.
    fn parse_amount(&self) -> Option<Money> {
        let raw = non_empty(self.amount.as_deref())?;
        Money::from_str(&raw).ok()
    }

    /// Parses the amount field as a non-negative entry count.
    fn parse_count(&self) -> Option<usize> {
        let raw = non_empty(self.amount.as_deref())?;
        raw.parse().ok()
    }
}

fn non_empty(field: Option<&str>) -> Option<String> {
    let trimmed = field?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// A parsed and validated command ready for execution.
#[derive(Debug, Clone)]
pub enum Command {
    /// Create an empty group.
    AddGroup { group: String },

    /// Emit all group names in creation order.
    ListGroups,

    /// Add a member with a zero balance.
    AddUser { group: String, user: String },

    /// Emit (member, balance) pairs, lowest payer first.
    ListUsers { group: String },

    /// Remove a member and all their transactions.
    RemoveUser { group: String, user: String },

    /// Emit one member's balance.
    UserBalance { group: String, user: String },

    /// Emit the members tied for the minimum balance.
    UnderPaid { group: String },

    /// Post a signed transaction for a member.
    AddXct {
        group: String,
        user: String,
        amount: Money,
    },

    /// Emit up to `count` most recent transactions, newest first.
    RecentXct { group: String, count: usize },
}
