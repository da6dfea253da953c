//! The group catalog: the entry point that owns every group.

use crate::error::{LedgerError, Result};
use crate::group::Group;

/// An insertion-ordered collection of groups, unique by name.
///
/// Lookup is a case-sensitive linear scan; catalogs are small and
/// enumeration order (creation order) matters more than lookup speed.
#[derive(Debug, Default)]
pub struct GroupCatalog {
    groups: Vec<Group>,
}

impl GroupCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        GroupCatalog::default()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no groups exist.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Creates an empty group, appended in creation order.
    ///
    /// Fails with [`LedgerError::GroupExists`] if the name is taken.
    pub fn add_group(&mut self, name: &str) -> Result<()> {
        if self.find_group(name).is_some() {
            return Err(LedgerError::GroupExists(name.to_string()));
        }
        self.groups.push(Group::new(name));
        Ok(())
    }

    /// Looks up a group by exact name.
    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name() == name)
    }

    /// Mutable lookup by exact name.
    pub fn find_group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|group| group.name() == name)
    }

    /// Group names in creation order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.name())
    }

    /// Groups in creation order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }
}
