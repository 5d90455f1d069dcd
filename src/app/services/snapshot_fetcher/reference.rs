//! Snapshot reference resolution from the update manifest
//!
//! The GDELT update manifest is a short text document naming the latest
//! export, mentions and graph files. Only the export line is of interest
//! here, matched by its dated `.export.CSV.zip` naming convention.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::EXPORT_CSV_ZIP_PATTERN;
use crate::{Error, Result};

static EXPORT_CSV_ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXPORT_CSV_ZIP_PATTERN).expect("export manifest pattern compiles"));

/// Resolved pointer to a Zip-compressed export snapshot
///
/// Immutable once resolved from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotReference {
    /// Expected size of the compressed file in bytes
    pub size: u64,

    /// Expected MD5 digest of the compressed file, as 32 lowercase hex chars
    pub md5_sum: String,

    /// Download URL of the compressed file
    pub url: String,
}

impl SnapshotReference {
    /// Resolve the export snapshot reference from manifest text
    ///
    /// The manifest shape is assumed stable and unambiguous: exactly one
    /// line must match the export naming convention, and zero or multiple
    /// matches are a structural error naming the actual count.
    pub fn from_manifest(content: &str) -> Result<Self> {
        let matches: Vec<_> = EXPORT_CSV_ZIP_RE.captures_iter(content).collect();
        if matches.len() != 1 {
            return Err(Error::manifest_reference(matches.len(), content));
        }

        let captures = &matches[0];
        let size_text = &captures["size"];
        let size: u64 = size_text
            .parse()
            .map_err(|_| Error::field_parsing("size", size_text))?;

        Ok(Self {
            size,
            md5_sum: captures["md5sum"].to_string(),
            url: captures["url"].to_string(),
        })
    }
}
