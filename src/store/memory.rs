use std::io::Read;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexSet;
use tracing::warn;

use crate::store::source::{Release, ReleaseSource};
use crate::version::error::StoreError;

/// Release store kept entirely in memory
///
/// Releases keep their insertion order; an owner exists once it has at
/// least one release.
#[derive(Debug, Default)]
pub struct MemoryStore {
    releases: RwLock<IndexSet<Release>>,
}

impl MemoryStore {
    pub fn new(releases: Vec<Release>) -> Self {
        let mut unique = IndexSet::with_capacity(releases.len());
        for release in releases {
            if unique.contains(&release) {
                warn!(
                    "Skipping duplicate release {} for {}",
                    release.version, release.owner
                );
            } else {
                unique.insert(release);
            }
        }
        Self {
            releases: RwLock::new(unique),
        }
    }

    /// Load releases from a JSON array of `{"owner": ..., "version": ...}`
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let releases: Vec<Release> = serde_json::from_reader(reader)?;
        Ok(Self::new(releases))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexSet<Release>>, StoreError> {
        self.releases.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IndexSet<Release>>, StoreError> {
        self.releases.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ReleaseSource for MemoryStore {
    fn all_versions(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read()?.iter().map(|r| r.version.clone()).collect())
    }

    fn releases_with_prefix(&self, prefix: &str) -> Result<Vec<Release>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|r| r.version.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn owners(&self) -> Result<Vec<String>, StoreError> {
        let releases = self.read()?;
        let owners: IndexSet<&str> = releases.iter().map(|r| r.owner.as_str()).collect();
        Ok(owners.into_iter().map(str::to_string).collect())
    }

    fn owner_exists(&self, owner: &str) -> Result<bool, StoreError> {
        Ok(self.read()?.iter().any(|r| r.owner == owner))
    }

    fn versions_for_owner(&self, owner: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|r| r.owner == owner)
            .map(|r| r.version.clone())
            .collect())
    }

    fn add_releases(&self, owner: &str, versions: Vec<String>) -> Result<(), StoreError> {
        let mut releases = self.write()?;
        for version in versions {
            releases.insert(Release::new(owner, version));
        }
        Ok(())
    }
}
