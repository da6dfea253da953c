//! Command script execution engine.
//!
//! Streams a CSV command script, executes each command against the group
//! catalog, and writes query results as they are produced. Rows that fail
//! to parse and commands that fail logically (duplicate names, unknown
//! groups or members, empty-group queries) are logged at warn level and
//! skipped; the stream keeps going.

use crate::catalog::GroupCatalog;
use crate::command::{Command, CommandRecord};
use crate::error::{LedgerError, Result};
use crate::group::Group;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// The ledger engine: owns the catalog and drives command scripts through it.
#[derive(Debug, Default)]
pub struct LedgerEngine {
    catalog: GroupCatalog,
}

impl LedgerEngine {
    /// Creates an engine with an empty catalog.
    pub fn new() -> Self {
        LedgerEngine::default()
    }

    /// Processes commands from a CSV reader in streaming fashion.
    ///
    /// Records are read one at a time; query output goes to `out` as each
    /// command executes. Invalid rows and logical failures are logged at
    /// warn level and skipped. Only I/O and CSV-stream errors abort.
    pub fn process_csv<R: Read, W: Write>(&mut self, reader: R, out: &mut W) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<CommandRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse() {
                    Some(command) => match self.execute(command, out) {
                        Ok(()) => {}
                        Err(e @ LedgerError::Io(_)) => return Err(e),
                        Err(e) => warn!("Row {}: {}", row_num, e),
                    },
                    None => warn!("Row {}: Failed to parse command record", row_num),
                },
                Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
            }
        }

        Ok(())
    }

    /// Executes a single command, writing any query output to `out`.
    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::AddGroup { group } => {
                self.catalog.add_group(&group)?;
                debug!("Created group '{}'", group);
            }
            Command::ListGroups => {
                for name in self.catalog.group_names() {
                    writeln!(out, "{}", name)?;
                }
            }
            Command::AddUser { group, user } => {
                self.group_mut(&group)?.add_user(&user)?;
                debug!("Added member '{}' to group '{}'", user, group);
            }
            Command::ListUsers { group } => {
                let group = self.group(&group)?;
                for (name, balance) in group.list_users() {
                    writeln!(out, "{} {}", name, balance)?;
                }
            }
            Command::RemoveUser { group, user } => {
                self.group_mut(&group)?.remove_user(&user)?;
                debug!("Removed member '{}' from group '{}'", user, group);
            }
            Command::UserBalance { group, user } => {
                let balance = self.group(&group)?.user_balance(&user)?;
                writeln!(out, "{} {}", user, balance)?;
            }
            Command::UnderPaid { group } => {
                for (name, balance) in self.group(&group)?.under_paid()? {
                    writeln!(out, "{} {}", name, balance)?;
                }
            }
            Command::AddXct {
                group,
                user,
                amount,
            } => {
                self.group_mut(&group)?.post_xct(&user, amount)?;
                debug!("Posted {} for '{}' in group '{}'", amount, user, group);
            }
            Command::RecentXct { group, count } => {
                let group = self.group(&group)?;
                for entry in group.recent_xct(count) {
                    writeln!(out, "{} {}", entry.user, entry.amount)?;
                }
            }
        }

        Ok(())
    }

    fn group(&self, name: &str) -> Result<&Group> {
        self.catalog
            .find_group(name)
            .ok_or_else(|| LedgerError::GroupNotFound(name.to_string()))
    }

    fn group_mut(&mut self, name: &str) -> Result<&mut Group> {
        self.catalog
            .find_group_mut(name)
            .ok_or_else(|| LedgerError::GroupNotFound(name.to_string()))
    }

    /// Writes every member's balance to CSV: one row per member, groups in
    /// creation order, members lowest payer first within each group.
    pub fn write_balances<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["group", "user", "balance"])?;

        for group in self.catalog.groups() {
            for (name, balance) in group.list_users() {
                csv_writer.write_record([
                    group.name().to_string(),
                    name.to_string(),
                    balance.to_string(),
                ])?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Returns a reference to the catalog (for testing).
    #[cfg(test)]
    pub fn catalog(&self) -> &GroupCatalog {
        &self.catalog
    }
}
