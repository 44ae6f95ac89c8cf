//! Release matrix assembly
//!
//! Drives the version pipeline against a [`ReleaseSource`]: resolves the
//! selection, filters the family, sorts it, windows it around the focal
//! version and collects the owners that have releases in the family.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::store::source::ReleaseSource;
use crate::version::compare::{SortDirection, sort_versions};
use crate::version::error::MatrixError;
use crate::version::family::{FamilyPrefix, filter_family};
use crate::version::latest::resolve_latest;
use crate::version::window::{DEFAULT_HALFWIDTH, Entry, window};

/// Options for building a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatrixOptions {
    /// Maximum number of versions shown on each side of the focal version
    pub halfwidth: usize,
    pub direction: SortDirection,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            halfwidth: DEFAULT_HALFWIDTH,
            direction: SortDirection::Ascending,
        }
    }
}

/// Owners × versions table for one version family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionMatrix {
    /// Version the header window is centered on
    pub focal: String,
    /// Windowed column headers
    pub header: Vec<Entry>,
    /// Owner name to the owner's versions in the family, ordered by name
    pub rows: IndexMap<String, Vec<String>>,
}

impl VersionMatrix {
    /// Check if an owner has released `version`
    pub fn has_release(&self, owner: &str, version: &str) -> bool {
        self.rows
            .get(owner)
            .is_some_and(|versions| versions.iter().any(|v| v == version))
    }
}

/// Build the release matrix for a selection.
///
/// The selection is either a family ("8.0", focal becomes the first version
/// in sort order) or a full version ("8.0.122A", which must exist). Without
/// a selection the latest version across the whole source is used; when that
/// version is not a real release the focal falls back to the first version of
/// its family.
pub fn build_matrix<S: ReleaseSource + ?Sized>(
    source: &S,
    selection: Option<&str>,
    options: &MatrixOptions,
) -> Result<VersionMatrix, MatrixError> {
    let (selection, resolved) = match selection {
        Some(selection) => (selection.to_string(), false),
        None => (resolve_latest(source.all_versions()?)?.to_string(), true),
    };
    info!("Building release matrix for {}", selection);

    let prefix = FamilyPrefix::parse(&selection)?;
    let releases = source.releases_with_prefix(prefix.as_str())?;

    let versions = releases.iter().map(|r| &r.version);
    let mut family: Vec<String> = filter_family(versions, prefix.as_str()).into_iter().collect();
    if family.is_empty() {
        return Err(MatrixError::NoMatchingVersions {
            prefix: prefix.as_str().to_string(),
        });
    }
    sort_versions(&mut family, options.direction);

    let focal = match prefix.focal() {
        Some(focal) if resolved && !family.iter().any(|v| v == focal) => {
            warn!(
                "Latest version {} is not a release, focusing on {}",
                focal, family[0]
            );
            family[0].clone()
        }
        Some(focal) => focal.to_string(),
        None => family[0].clone(),
    };
    let header = window(&family, &focal, options.halfwidth)?;

    let mut rows: IndexMap<String, Vec<String>> = IndexMap::new();
    for release in releases {
        let versions = rows.entry(release.owner).or_default();
        if !versions.contains(&release.version) {
            versions.push(release.version);
        }
    }
    rows.sort_unstable_keys();
    for versions in rows.values_mut() {
        sort_versions(versions, options.direction);
    }

    debug!(
        "Matrix for {}: {} versions in family, {} owners",
        focal,
        family.len(),
        rows.len()
    );
    Ok(VersionMatrix {
        focal,
        header,
        rows,
    })
}

/// Get the sorted versions of one owner.
pub fn owner_versions<S: ReleaseSource + ?Sized>(
    source: &S,
    owner: &str,
    direction: SortDirection,
) -> Result<Vec<String>, MatrixError> {
    if !source.owner_exists(owner)? {
        return Err(MatrixError::UnknownOwner(owner.to_string()));
    }

    let mut versions = source.versions_for_owner(owner)?;
    sort_versions(&mut versions, direction);
    Ok(versions)
}

/// Get every owner (or just `owner`) with its sorted versions, ordered by name.
pub fn owner_table<S: ReleaseSource + ?Sized>(
    source: &S,
    owner: Option<&str>,
    direction: SortDirection,
) -> Result<IndexMap<String, Vec<String>>, MatrixError> {
    let owners = match owner {
        Some(owner) => vec![owner.to_string()],
        None => source.owners()?,
    };

    let mut table = IndexMap::new();
    for owner in owners {
        let versions = owner_versions(source, &owner, direction)?;
        table.insert(owner, versions);
    }
    table.sort_unstable_keys();

    Ok(table)
}
