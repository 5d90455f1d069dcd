//! Tests for manifest reference resolution

use crate::Error;
use crate::app::services::snapshot_fetcher::SnapshotReference;

const VALID_MANIFEST: &str = "\
120846 a0788e3d3fd1ee1e4ca0d9a6eae85de6 http://data.gdeltproject.org/gdeltv2/20230615120000.export.CSV.zip
159698 290a7d8a1a8a5b53ae2402d1bc9a4ff1 http://data.gdeltproject.org/gdeltv2/20230615120000.mentions.CSV.zip
399056 7c47f98726e2a1b2bcb5a3e9dc41b3ae http://data.gdeltproject.org/gdeltv2/20230615120000.gkg.csv.zip
";

#[test]
fn test_resolve_valid_manifest() {
    let reference = SnapshotReference::from_manifest(VALID_MANIFEST).unwrap();

    assert_eq!(reference.size, 120846);
    assert_eq!(reference.md5_sum, "a0788e3d3fd1ee1e4ca0d9a6eae85de6");
    assert_eq!(
        reference.url,
        "http://data.gdeltproject.org/gdeltv2/20230615120000.export.CSV.zip"
    );
}

#[test]
fn test_resolve_ignores_mentions_and_graph_lines() {
    // Only the export line matches; the mentions and gkg lines must not count
    let reference = SnapshotReference::from_manifest(VALID_MANIFEST).unwrap();
    assert!(reference.url.ends_with(".export.CSV.zip"));
}

#[test]
fn test_resolve_zero_matches() {
    let manifest = "159698 290a7d8a1a8a5b53ae2402d1bc9a4ff1 \
                    http://data.gdeltproject.org/gdeltv2/20230615120000.mentions.CSV.zip\n";

    let err = SnapshotReference::from_manifest(manifest).unwrap_err();
    match err {
        Error::ManifestReference { matches, .. } => assert_eq!(matches, 0),
        other => panic!("expected ManifestReference error, got {other:?}"),
    }
}

#[test]
fn test_resolve_multiple_matches() {
    let manifest = "\
120846 a0788e3d3fd1ee1e4ca0d9a6eae85de6 http://data.gdeltproject.org/gdeltv2/20230615120000.export.CSV.zip
120999 b1788e3d3fd1ee1e4ca0d9a6eae85de7 http://data.gdeltproject.org/gdeltv2/20230615121500.export.CSV.zip
";

    let err = SnapshotReference::from_manifest(manifest).unwrap_err();
    match err {
        Error::ManifestReference { matches, .. } => assert_eq!(matches, 2),
        other => panic!("expected ManifestReference error, got {other:?}"),
    }
}

#[test]
fn test_resolve_rejects_uppercase_digest() {
    // The manifest publishes lowercase digests; uppercase is not a match
    let manifest = "120846 A0788E3D3FD1EE1E4CA0D9A6EAE85DE6 \
                    http://data.gdeltproject.org/gdeltv2/20230615120000.export.CSV.zip\n";

    assert!(SnapshotReference::from_manifest(manifest).is_err());
}

#[test]
fn test_resolve_empty_manifest() {
    let err = SnapshotReference::from_manifest("").unwrap_err();
    match err {
        Error::ManifestReference { matches, .. } => assert_eq!(matches, 0),
        other => panic!("expected ManifestReference error, got {other:?}"),
    }
}
