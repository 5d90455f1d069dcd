//! Snapshot retrieval pipeline for GDELT export files
//!
//! This module resolves the latest export snapshot from the GDELT update
//! manifest, downloads it, verifies its MD5 checksum, extracts the single
//! `.export.CSV` entry from the Zip container and decodes it into event
//! records. The stages run strictly in sequence; unverified content is never
//! decoded.
//!
//! ## Architecture
//!
//! - [`reference`] - Manifest pattern matching and snapshot references
//! - [`http`] - Plain HTTP GET helpers
//! - [`verify`] - MD5 content verification
//! - [`archive`] - Export entry selection from the Zip container
//! - [`fetcher`] - Pipeline orchestration

pub mod archive;
pub mod fetcher;
pub mod http;
pub mod reference;
pub mod verify;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use fetcher::{SnapshotFetcher, decode_verified_content, get_latest_events};
pub use reference::SnapshotReference;
