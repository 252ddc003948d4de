use std::fs;

use tempfile::TempDir;

use satchel::maven::{DEFAULT_EXTENSION, MavenArtifact, MavenRepository};
use satchel::version::Version;

fn repository_with_versions(versions: &[&str]) -> (TempDir, MavenRepository) {
    let temp_dir = TempDir::new().unwrap();

    let artifact_dir = temp_dir.path().join("info").join("example").join("gadget");
    for version in versions {
        fs::create_dir_all(artifact_dir.join(version)).unwrap();
    }

    let repository = MavenRepository::new(temp_dir.path());
    (temp_dir, repository)
}

#[test]
fn artifact_path_joins_the_root_with_the_relative_path() {
    let repository = MavenRepository::new("/repo");

    let artifact = MavenArtifact::new("info.example")
        .with_artifact_id("gadget")
        .with_version(Version::parse("1.2.3").unwrap());

    assert_eq!(
        repository.artifact_path(&artifact, None, Some(DEFAULT_EXTENSION)),
        std::path::PathBuf::from("/repo")
            .join("info")
            .join("example")
            .join("gadget")
            .join("1.2.3")
            .join("gadget-1.2.3.jar")
    );
}

#[test]
fn latest_artifact_version_scans_the_version_directory() {
    let (_temp_dir, repository) = repository_with_versions(&["1.0", "1.2.5", "1.3"]);

    let latest = repository
        .latest_artifact_version("info.example", "gadget")
        .unwrap();

    assert_eq!(latest, Some(Version::parse("1.3").unwrap()));
}

#[test]
fn latest_artifact_version_ignores_non_version_entries() {
    let (temp_dir, repository) = repository_with_versions(&["2.1"]);
    let artifact_dir = temp_dir.path().join("info").join("example").join("gadget");
    fs::write(artifact_dir.join("maven-metadata.xml"), "").unwrap();

    let latest = repository
        .latest_artifact_version("info.example", "gadget")
        .unwrap();

    assert_eq!(latest, Some(Version::parse("2.1").unwrap()));
}

#[test]
fn latest_artifact_version_for_an_unknown_artifact_is_none() {
    let (_temp_dir, repository) = repository_with_versions(&["1.0"]);

    let latest = repository
        .latest_artifact_version("info.example", "unknown")
        .unwrap();

    assert_eq!(latest, None);
}
