//! Export entry selection from the Zip container
//!
//! A snapshot archive is expected to hold exactly one entry named with the
//! `.export.CSV` suffix. Zero matching entries is an empty snapshot, not an
//! error; more than one is an ambiguous archive.

use std::io::{Cursor, Read};

use tracing::debug;
use zip::ZipArchive;

use crate::constants::EXPORT_CSV_SUFFIX;
use crate::{Error, Result};

/// A decompressed export entry
#[derive(Debug, Clone)]
pub struct ExportEntry {
    /// Entry name within the archive
    pub name: String,

    /// Decompressed entry content
    pub data: Vec<u8>,
}

/// Select and decompress the single export entry from archive content
pub fn read_export_entry(content: &[u8]) -> Result<Option<ExportEntry>> {
    let mut archive = ZipArchive::new(Cursor::new(content))
        .map_err(|e| Error::zip_archive("failed to open archive", e))?;
    debug!("Opened Zip archive with {} entries", archive.len());

    let mut selected: Option<ExportEntry> = None;
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| Error::zip_archive(format!("failed to read entry {index}"), e))?;
        let name = entry.name().to_string();

        if !name.ends_with(EXPORT_CSV_SUFFIX) {
            continue;
        }
        if let Some(existing) = &selected {
            return Err(Error::ambiguous_archive(&existing.name, name));
        }

        let mut data = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut data)
            .map_err(|e| Error::io(format!("failed to decompress entry '{name}'"), e))?;
        selected = Some(ExportEntry { name, data });
    }

    Ok(selected)
}
