//! MD5 content verification for downloaded snapshots

use md5::{Digest, Md5};

use crate::{Error, Result};

/// Verify content against an expected MD5 digest in lowercase hex
///
/// The comparison is case-sensitive; the manifest always publishes lowercase
/// digests. A mismatch is a fatal integrity error carrying both digests and
/// must never be downgraded to a warning.
pub fn check_md5(content: &[u8], expected: &str) -> Result<()> {
    let actual = hex::encode(Md5::digest(content));
    if actual != expected {
        return Err(Error::checksum_mismatch(expected, actual));
    }
    Ok(())
}

/// Compute the MD5 digest of content as lowercase hex
pub fn md5_hex(content: &[u8]) -> String {
    hex::encode(Md5::digest(content))
}
