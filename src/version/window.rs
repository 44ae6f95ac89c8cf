//! Display window around a focal version
//!
//! In whatever order the family was sorted, "newer" entries are the ones
//! before the focal version and "older" entries the ones after it.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::version::error::MatrixError;

/// Number of entries shown on each side of the focal version by default
pub const DEFAULT_HALFWIDTH: usize = 10;

/// One column of a display window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Entry {
    Version(String),
    /// More versions exist beyond this side of the window
    Ellipsis,
}

impl Entry {
    pub fn as_version(&self) -> Option<&str> {
        match self {
            Entry::Version(version) => Some(version),
            Entry::Ellipsis => None,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Version(version) => f.write_str(version),
            Entry::Ellipsis => f.write_str("..."),
        }
    }
}

/// Select at most `halfwidth` entries on each side of `focal`.
///
/// `sorted_family` must already be sorted in the caller's direction. The
/// window is clamped at both ends of the family, and an [`Entry::Ellipsis`]
/// marks each side where entries were left out.
pub fn window<S: AsRef<str>>(
    sorted_family: &[S],
    focal: &str,
    halfwidth: usize,
) -> Result<Vec<Entry>, MatrixError> {
    let Some(index) = sorted_family.iter().position(|v| v.as_ref() == focal) else {
        return Err(MatrixError::FocalNotFound {
            focal: focal.to_string(),
        });
    };

    let start = index.saturating_sub(halfwidth);
    let end = sorted_family
        .len()
        .min(index.saturating_add(halfwidth).saturating_add(1));

    let mut entries = Vec::with_capacity(end - start + 2);
    if start > 0 {
        entries.push(Entry::Ellipsis);
    }
    entries.extend(
        sorted_family[start..end]
            .iter()
            .map(|v| Entry::Version(v.as_ref().to_string())),
    );
    if end < sorted_family.len() {
        entries.push(Entry::Ellipsis);
    }

    debug!(
        "Window around {} at index {}: {} newer, {} older of {}",
        focal,
        index,
        index - start,
        end - index - 1,
        sorted_family.len()
    );
    Ok(entries)
}
