//! Latest version resolution by independent segment maximization
//!
//! The major, minor and patch parts are maximized one after another, each
//! step restricted to the versions matching the parts chosen so far. This is
//! not the same as taking the maximum of the sorted set: the patch is the
//! largest token found in any third segment, so the result can name a
//! version that is not in the input (e.g. "8.0.12A" and "8.0.3" resolve to
//! patch "A").

use std::fmt;

use tracing::debug;

use crate::version::error::MatrixError;
use crate::version::token::{Token, tokenize};

/// Result of [`resolve_latest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestVersion {
    pub major: Token,
    pub minor: Token,
    pub patch: Token,
}

impl fmt::Display for LatestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parse a major or minor segment as an all-digit [`Token::Number`].
///
/// Leading zeros are dropped, so "08" yields the prefix "8." like any other
/// integer would.
fn parse_segment(version: &str, index: usize) -> Result<Token, MatrixError> {
    let invalid = || MatrixError::InvalidVersion(version.to_string());
    let segment = version.split('.').nth(index).ok_or_else(invalid)?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let digits = segment.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    Ok(Token::Number(digits.to_string()))
}

/// Resolve the latest major.minor.patch across a collection of versions.
///
/// Versions are only consulted for a step when they start with the parts
/// chosen by the previous steps ("8." for the minor, "8.1." for the patch).
/// Segments compare like tokens, so digit runs of any length are accepted.
pub fn resolve_latest<I, S>(versions: I) -> Result<LatestVersion, MatrixError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let versions: Vec<S> = versions.into_iter().collect();

    let mut major: Option<Token> = None;
    for version in &versions {
        major = major.max(Some(parse_segment(version.as_ref(), 0)?));
    }
    let Some(major) = major else {
        return Err(MatrixError::EmptyInput);
    };

    let major_prefix = format!("{major}.");
    let mut minor: Option<Token> = None;
    for version in versions.iter().map(|v| v.as_ref()) {
        if version.starts_with(&major_prefix) {
            let segment = parse_segment(version, 1)?;
            minor = minor.max(Some(segment));
        }
    }
    let Some(minor) = minor else {
        return Err(MatrixError::NoMatchingVersions {
            prefix: major_prefix,
        });
    };

    let minor_prefix = format!("{major}.{minor}.");
    let patch = versions
        .iter()
        .map(|v| v.as_ref())
        .filter(|v| v.starts_with(&minor_prefix))
        .filter_map(|v| v.split('.').nth(2))
        .flat_map(tokenize)
        .max();
    let Some(patch) = patch else {
        return Err(MatrixError::NoMatchingVersions {
            prefix: minor_prefix,
        });
    };

    let latest = LatestVersion {
        major,
        minor,
        patch,
    };
    debug!("Resolved latest version {} from {} versions", latest, versions.len());
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn resolve_latest_maximizes_each_segment_within_the_previous_one() {
        let latest = resolve_latest(["8.1.3", "8.0.125", "8.0.12A", "7.0.99"]).unwrap();

        assert_eq!(
            latest,
            LatestVersion {
                major: Token::Number("8".to_string()),
                minor: Token::Number("1".to_string()),
                patch: Token::Number("3".to_string()),
            }
        );
        assert_eq!(latest.to_string(), "8.1.3");
    }

    #[rstest]
    #[case(&["8.0.1", "8.0.10", "8.0.9"], "8.0.10")]
    #[case(&["7.9.9", "10.0.1", "9.9.9"], "10.0.1")]
    #[case(&["8.2.1", "8.10.0"], "8.10.0")]
    #[case(&["8.0.122", "8.0.122A"], "8.0.A")]
    #[case(&["8.0.12A", "8.0.3"], "8.0.A")]
    #[case(&["8.00.4", "8.0.2"], "8.0.2")]
    #[case(
        &["99999999999999999999999.1.2", "9.9.9"],
        "99999999999999999999999.1.2"
    )]
    #[case(&["8.123456789012345678901.0", "8.2.5"], "8.123456789012345678901.0")]
    fn resolve_latest_returns_expected(#[case] versions: &[&str], #[case] expected: &str) {
        assert_eq!(resolve_latest(versions).unwrap().to_string(), expected);
    }

    #[test]
    fn resolve_latest_can_synthesize_a_missing_version() {
        let versions = ["8.0.12A", "8.0.30"];
        let latest = resolve_latest(versions).unwrap().to_string();

        assert_eq!(latest, "8.0.A");
        assert!(!versions.contains(&latest.as_str()));
    }

    #[test]
    fn resolve_latest_fails_on_empty_input() {
        let versions: Vec<String> = vec![];
        assert!(matches!(
            resolve_latest(&versions),
            Err(MatrixError::EmptyInput)
        ));
    }

    #[rstest]
    #[case(&["abc"])]
    #[case(&["8.x.1"])]
    #[case(&["8.0.1", "beta.1"])]
    #[case(&["8.+1.0"])]
    #[case(&[".1.0"])]
    fn resolve_latest_rejects_non_numeric_segments(#[case] versions: &[&str]) {
        assert!(matches!(
            resolve_latest(versions),
            Err(MatrixError::InvalidVersion(_))
        ));
    }

    #[test]
    fn resolve_latest_fails_when_no_version_starts_with_the_major() {
        let result = resolve_latest(["08.1.5"]);
        assert!(matches!(
            result,
            Err(MatrixError::NoMatchingVersions { prefix }) if prefix == "8."
        ));
    }

    #[test]
    fn resolve_latest_fails_when_no_third_segment_exists() {
        let result = resolve_latest(["8.1", "8.0.1"]);
        assert!(matches!(
            result,
            Err(MatrixError::NoMatchingVersions { prefix }) if prefix == "8.1."
        ));
    }
}
