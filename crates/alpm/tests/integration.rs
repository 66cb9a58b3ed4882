//! Integration tests for the local-database loader

use std::fs;
use std::path::Path;

use pacsweep_alpm::load_tracked_paths;
use pacsweep_errors::{DatabaseError, Error};

fn add_package(db: &Path, name: &str, files: &str) {
    let pkg_dir = db.join("local").join(name);
    fs::create_dir_all(&pkg_dir).unwrap();
    fs::write(pkg_dir.join("files"), files).unwrap();
    fs::write(pkg_dir.join("desc"), "%NAME%\nstub\n").unwrap();
}

#[test]
fn loads_file_lists_from_every_package() {
    let db = tempfile::tempdir().unwrap();
    add_package(
        db.path(),
        "coreutils-9.7-1",
        "%FILES%\nusr/\nusr/bin/\nusr/bin/ls\nusr/bin/cat\n",
    );
    add_package(db.path(), "filesystem-2025.05.01-1", "%FILES%\netc/\netc/fstab\n");
    fs::write(db.path().join("local/ALPM_DB_VERSION"), "9\n").unwrap();

    let index = load_tracked_paths(db.path()).unwrap();

    assert_eq!(index.len(), 6);
    assert!(index.contains("usr/bin/ls"));
    assert!(index.contains("usr/bin/cat"));
    assert!(index.contains("etc/fstab"));
}

#[test]
fn missing_local_directory_is_fatal() {
    let db = tempfile::tempdir().unwrap();

    let err = load_tracked_paths(db.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::NotFound { .. })
    ));
}

#[test]
fn package_without_files_list_is_fatal() {
    let db = tempfile::tempdir().unwrap();
    add_package(db.path(), "good-1.0-1", "%FILES%\nusr/bin/good\n");
    fs::create_dir_all(db.path().join("local/broken-1.0-1")).unwrap();

    let err = load_tracked_paths(db.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::MissingFilesList { ref name }) if name == "broken-1.0-1"
    ));
}

#[test]
fn database_with_no_packages_yields_an_empty_index() {
    let db = tempfile::tempdir().unwrap();
    fs::create_dir_all(db.path().join("local")).unwrap();
    fs::write(db.path().join("local/ALPM_DB_VERSION"), "9\n").unwrap();

    let index = load_tracked_paths(db.path()).unwrap();
    assert!(index.is_empty());
}
