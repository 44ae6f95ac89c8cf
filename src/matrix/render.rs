//! Text and JSON rendering of release matrices

use std::fmt::Write;

use indexmap::IndexMap;

use crate::matrix::builder::VersionMatrix;
use crate::version::window::Entry;

const RELEASE_MARK: &str = "x";

/// Render a matrix as an aligned text table.
///
/// The header row lists the windowed versions with the focal version
/// wrapped in brackets; each owner row marks the versions it has.
pub fn render_text(matrix: &VersionMatrix) -> String {
    let header: Vec<String> = matrix
        .header
        .iter()
        .map(|entry| match entry {
            Entry::Version(version) if *version == matrix.focal => format!("[{version}]"),
            entry => entry.to_string(),
        })
        .collect();

    let owner_width = matrix
        .rows
        .keys()
        .map(|owner| owner.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let mut line = format!("{:owner_width$}", "");
    for column in &header {
        let _ = write!(line, " | {column}");
    }
    out.push_str(line.trim_end());
    out.push('\n');

    for (owner, versions) in &matrix.rows {
        let mut line = format!("{owner:owner_width$}");
        for (entry, column) in matrix.header.iter().zip(&header) {
            let width = column.chars().count();
            let cell = match entry.as_version() {
                Some(version) if versions.iter().any(|v| v == version) => RELEASE_MARK,
                _ => "",
            };
            let _ = write!(line, " | {cell:^width$}");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Render owners and their versions, one owner per line
pub fn render_table(table: &IndexMap<String, Vec<String>>) -> String {
    table
        .iter()
        .map(|(owner, versions)| format!("{owner}: {}\n", versions.join(", ")))
        .collect()
}

/// Render a matrix as pretty-printed JSON
pub fn render_json(matrix: &VersionMatrix) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(matrix)
}
