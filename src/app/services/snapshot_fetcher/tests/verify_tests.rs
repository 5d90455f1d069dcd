//! Tests for MD5 content verification

use crate::Error;
use crate::app::services::snapshot_fetcher::verify::{check_md5, md5_hex};

#[test]
fn test_known_digest_vectors() {
    assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn test_check_md5_success() {
    let content = b"some snapshot content";
    assert!(check_md5(content, &md5_hex(content)).is_ok());
}

#[test]
fn test_check_md5_mismatch() {
    let content = b"some snapshot content";
    let expected = "00000000000000000000000000000000";

    let err = check_md5(content, expected).unwrap_err();
    match err {
        Error::ChecksumMismatch {
            expected: e,
            actual,
        } => {
            assert_eq!(e, expected);
            assert_eq!(actual, md5_hex(content));
        }
        other => panic!("expected ChecksumMismatch error, got {other:?}"),
    }
}

#[test]
fn test_check_md5_is_case_sensitive() {
    let content = b"abc";
    let uppercase = "900150983CD24FB0D6963F7D28E17F72";

    assert!(check_md5(content, uppercase).is_err());
}
