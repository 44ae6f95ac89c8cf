//! Access to persisted releases

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::version::error::StoreError;

/// A version published for an owner (a device or a course)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Release {
    pub owner: String,
    pub version: String,
}

impl Release {
    pub fn new(owner: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            version: version.into(),
        }
    }
}

/// Trait for reading and recording releases
#[cfg_attr(test, automock)]
pub trait ReleaseSource: Send + Sync {
    /// Get every stored version across all owners (may contain duplicates)
    fn all_versions(&self) -> Result<Vec<String>, StoreError>;

    /// Get the releases whose version starts with `prefix`
    ///
    /// The prefix is matched literally; it is not a LIKE pattern.
    fn releases_with_prefix(&self, prefix: &str) -> Result<Vec<Release>, StoreError>;

    /// Get all owner names
    fn owners(&self) -> Result<Vec<String>, StoreError>;

    /// Check if an owner is known
    fn owner_exists(&self, owner: &str) -> Result<bool, StoreError>;

    /// Get the versions published for one owner
    fn versions_for_owner(&self, owner: &str) -> Result<Vec<String>, StoreError>;

    /// Record versions for an owner, creating the owner if needed
    ///
    /// Versions the owner already has are skipped.
    fn add_releases(&self, owner: &str, versions: Vec<String>) -> Result<(), StoreError>;
}
