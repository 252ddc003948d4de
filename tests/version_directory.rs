use std::collections::HashSet;
use std::fs;

use tempfile::TempDir;

use satchel::version::{Version, VersionDirectory};

fn populated_directory() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    for name in ["2", "3.5.6.7", "4.8", "6.1.2", "not-a-version"] {
        fs::write(temp_dir.path().join(name), "").unwrap();
    }

    temp_dir
}

#[test]
fn versions_skips_entries_that_do_not_parse() {
    let temp_dir = populated_directory();
    let directory = VersionDirectory::new(temp_dir.path());

    let versions: HashSet<String> = directory
        .versions()
        .unwrap()
        .iter()
        .map(|version| version.raw_str().to_string())
        .collect();

    let expected: HashSet<String> = ["2", "3.5.6.7", "4.8", "6.1.2"]
        .iter()
        .map(|name| name.to_string())
        .collect();

    assert_eq!(versions, expected);
}

#[test]
fn versions_accepts_subdirectories_as_entries() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("1.4")).unwrap();

    let directory = VersionDirectory::new(temp_dir.path());

    assert_eq!(
        directory.versions().unwrap(),
        vec![Version::parse("1.4").unwrap()]
    );
}

#[test]
fn versions_on_a_missing_directory_is_empty() {
    let directory = VersionDirectory::new("/does/not/exist");

    assert!(directory.versions().unwrap().is_empty());
}

#[test]
fn latest_version_picks_the_greatest_entry() {
    let temp_dir = populated_directory();
    let directory = VersionDirectory::new(temp_dir.path());

    assert_eq!(
        directory.latest_version().unwrap(),
        Some(Version::parse("6.1.2").unwrap())
    );
}

#[test]
fn latest_version_on_a_missing_directory_is_none() {
    let directory = VersionDirectory::new("/does/not/exist");

    assert_eq!(directory.latest_version().unwrap(), None);
}

#[test]
fn latest_version_on_a_directory_without_version_entries_is_none() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("README"), "").unwrap();

    let directory = VersionDirectory::new(temp_dir.path());

    assert_eq!(directory.latest_version().unwrap(), None);
}
