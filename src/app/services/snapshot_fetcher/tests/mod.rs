//! Tests for the snapshot retrieval pipeline

pub mod reference_tests;
pub mod verify_tests;

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::app::services::snapshot_fetcher::reference::SnapshotReference;
use crate::app::services::snapshot_fetcher::verify;

/// Build an in-memory Zip archive from (name, content) pairs
pub fn build_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Build a snapshot reference whose digest matches the given content
pub fn reference_for(content: &[u8]) -> SnapshotReference {
    SnapshotReference {
        size: content.len() as u64,
        md5_sum: verify::md5_hex(content),
        url: "http://data.gdeltproject.org/gdeltv2/20230615120000.export.CSV.zip".to_string(),
    }
}
