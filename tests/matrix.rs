use tempfile::TempDir;
use version_matrix::matrix::{MatrixOptions, build_matrix, owner_versions, render_text};
use version_matrix::store::{MemoryStore, Release, ReleaseSource, SqliteStore};
use version_matrix::version::{Entry, MatrixError, SortDirection};

fn family_of_25(store: &SqliteStore) {
    let (even, odd): (Vec<_>, Vec<_>) = (0..25).partition(|i| i % 2 == 0);
    store
        .add_releases("device_a", even.iter().map(|i| format!("8.0.{i}")).collect())
        .unwrap();
    store
        .add_releases("device_b", odd.iter().map(|i| format!("8.0.{i}")).collect())
        .unwrap();
    store
        .add_releases("device_c", vec!["8.1.0".to_string(), "7.9.9".to_string()])
        .unwrap();
}

#[test]
fn matrix_window_is_clipped_on_both_sides() {
    let temp_dir = TempDir::new().unwrap();
    let store = SqliteStore::new(&temp_dir.path().join("test.db")).unwrap();
    family_of_25(&store);

    let matrix = build_matrix(&store, Some("8.0.12"), &MatrixOptions::default()).unwrap();

    assert_eq!(matrix.header.len(), 23);
    assert_eq!(matrix.header[0], Entry::Ellipsis);
    assert_eq!(matrix.header[1], Entry::Version("8.0.2".to_string()));
    assert_eq!(matrix.header[11], Entry::Version("8.0.12".to_string()));
    assert_eq!(matrix.header[21], Entry::Version("8.0.22".to_string()));
    assert_eq!(matrix.header[22], Entry::Ellipsis);
    assert_eq!(
        matrix.rows.keys().collect::<Vec<_>>(),
        vec!["device_a", "device_b"]
    );
    assert!(matrix.has_release("device_a", "8.0.12"));
    assert!(!matrix.has_release("device_b", "8.0.12"));
}

#[test]
fn matrix_window_is_clamped_at_the_front() {
    let store = SqliteStore::in_memory().unwrap();
    family_of_25(&store);

    let matrix = build_matrix(&store, Some("8.0.3"), &MatrixOptions::default()).unwrap();

    assert_eq!(matrix.header[0], Entry::Version("8.0.0".to_string()));
    assert_eq!(matrix.header[3], Entry::Version("8.0.3".to_string()));
    assert_eq!(matrix.header.last(), Some(&Entry::Ellipsis));
    assert_eq!(matrix.header.len(), 15);
}

#[test]
fn matrix_defaults_to_latest_family() {
    let store = SqliteStore::in_memory().unwrap();
    family_of_25(&store);

    let matrix = build_matrix(&store, None, &MatrixOptions::default()).unwrap();

    assert_eq!(matrix.focal, "8.1.0");
    assert_eq!(matrix.header, vec![Entry::Version("8.1.0".to_string())]);
    assert_eq!(render_text(&matrix), "         | [8.1.0]\ndevice_c |    x\n");
}

#[test]
fn matrix_defaults_to_first_release_when_latest_is_not_a_release() {
    let store = MemoryStore::new(vec![
        Release::new("device_1", "8.0.122"),
        Release::new("device_1", "8.0.122A"),
        Release::new("device_2", "8.0.121"),
    ]);

    let matrix = build_matrix(&store, None, &MatrixOptions::default()).unwrap();

    assert_eq!(matrix.focal, "8.0.121");
    assert_eq!(
        matrix.header,
        vec![
            Entry::Version("8.0.121".to_string()),
            Entry::Version("8.0.122".to_string()),
            Entry::Version("8.0.122A".to_string()),
        ]
    );
    assert!(matrix.has_release("device_1", "8.0.122A"));
    assert!(render_text(&matrix).contains("[8.0.121]"));
}

#[test]
fn matrix_reports_unknown_family() {
    let store = SqliteStore::in_memory().unwrap();
    family_of_25(&store);

    let result = build_matrix(&store, Some("9.0"), &MatrixOptions::default());

    assert!(matches!(result, Err(MatrixError::NoMatchingVersions { .. })));
}

#[test]
fn owner_versions_lists_newest_first_for_profiles() {
    let store = SqliteStore::in_memory().unwrap();
    store
        .add_releases(
            "device_1",
            vec![
                "8.0.122".to_string(),
                "8.0.9".to_string(),
                "8.0.122A".to_string(),
            ],
        )
        .unwrap();

    let versions = owner_versions(&store, "device_1", SortDirection::Descending).unwrap();

    assert_eq!(versions, vec!["8.0.122A", "8.0.122", "8.0.9"]);
}
