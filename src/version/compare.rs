//! Natural-order comparison of version strings

use std::cmp::{Ordering, Reverse};

use serde::{Deserialize, Serialize};

use crate::version::token::{Token, tokenize};

/// Direction of a version listing
///
/// Views disagree on whether the newest release comes first, so every sort
/// entry point takes the direction explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first
    #[default]
    Ascending,
    /// Newest first
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending ordering
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Compare two token sequences position by position.
///
/// A sequence that runs out first sorts first.
pub fn compare_tokens(a: &[Token], b: &[Token]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.cmp(y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Compare two version strings in ascending natural order.
///
/// Examples:
/// - "8.0.9" < "8.0.10"
/// - "8.0.122" < "8.0.122A"
/// - "8.0" < "8.0.1"
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    compare_tokens(&tokenize(a), &tokenize(b))
}

/// Compare two version strings in the given direction
pub fn compare_directed(a: &str, b: &str, direction: SortDirection) -> Ordering {
    direction.apply(compare_versions(a, b))
}

/// Sort versions in natural order.
///
/// Each version is tokenized once per call. The sort is stable, so versions
/// that compare equal ("8.07" and "8.7") keep their input order.
pub fn sort_versions<S: AsRef<str>>(versions: &mut [S], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => {
            versions.sort_by_cached_key(|v| NaturalKey(tokenize(v.as_ref())));
        }
        SortDirection::Descending => {
            versions.sort_by_cached_key(|v| Reverse(NaturalKey(tokenize(v.as_ref()))));
        }
    }
}

#[derive(PartialEq, Eq)]
struct NaturalKey(Vec<Token>);

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_tokens(&self.0, &other.0)
    }
}

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
