//! Version families: all versions sharing a "major.minor" prefix

use std::collections::BTreeSet;

use crate::version::error::MatrixError;

/// Select the versions whose string form starts with `prefix`.
///
/// This is a plain string prefix match, not a tokenized one: "8.0" also
/// matches "8.01.1". Duplicates collapse into one entry.
pub fn filter_family<I, S>(versions: I, prefix: &str) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    versions
        .into_iter()
        .filter(|v| v.as_ref().starts_with(prefix))
        .map(|v| v.as_ref().to_string())
        .collect()
}

/// A parsed matrix selection such as "8.0" or "8.0.122A"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyPrefix {
    prefix: String,
    focal: Option<String>,
}

impl FamilyPrefix {
    /// Parse a selection into its family prefix.
    ///
    /// A selection needs at least two dot-separated parts. With exactly two
    /// ("8.0") there is no focal version; with more, the whole selection is
    /// the focal version.
    pub fn parse(selection: &str) -> Result<Self, MatrixError> {
        let mut parts = selection.splitn(3, '.');
        let (Some(major), Some(minor)) = (parts.next(), parts.next()) else {
            return Err(MatrixError::InvalidPrefix(selection.to_string()));
        };

        Ok(Self {
            prefix: format!("{major}.{minor}"),
            focal: parts.next().map(|_| selection.to_string()),
        })
    }

    /// The "major.minor" prefix
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// The selected version, if the selection named one
    pub fn focal(&self) -> Option<&str> {
        self.focal.as_deref()
    }
}
