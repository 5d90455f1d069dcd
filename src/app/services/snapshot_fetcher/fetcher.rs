//! Snapshot retrieval pipeline orchestration
//!
//! The pipeline runs strictly sequential stages with no retry, branching or
//! partial-result salvage: manifest fetch, reference resolution, download,
//! checksum verification, entry selection, row decoding. Every invocation
//! allocates fresh state, so concurrent callers share nothing.

use reqwest::Client;
use tracing::{debug, info};

use super::reference::SnapshotReference;
use super::{archive, http, verify};
use crate::app::models::Event;
use crate::app::services::event_csv_parser::EventCsvReader;
use crate::constants::DEFAULT_LAST_UPDATE_URL;
use crate::Result;

/// Retrieval pipeline for the latest export snapshot
#[derive(Debug, Clone)]
pub struct SnapshotFetcher {
    client: Client,
    last_update_url: String,
}

impl SnapshotFetcher {
    /// Create a fetcher using the default GDELT update manifest URL
    pub fn new() -> Self {
        Self::with_last_update_url(DEFAULT_LAST_UPDATE_URL)
    }

    /// Create a fetcher resolving snapshots from a custom manifest URL
    pub fn with_last_update_url(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            last_update_url: url.into(),
        }
    }

    /// Resolve the reference to the latest export snapshot
    pub async fn fetch_reference(&self) -> Result<SnapshotReference> {
        info!("Fetching update manifest from {}", self.last_update_url);
        let manifest = http::get_text(&self.client, &self.last_update_url).await?;

        let reference = SnapshotReference::from_manifest(&manifest)?;
        debug!(
            "Resolved snapshot reference: {} ({} bytes expected)",
            reference.url, reference.size
        );
        Ok(reference)
    }

    /// Download, verify and decode the snapshot named by a reference
    pub async fn fetch_events(&self, reference: &SnapshotReference) -> Result<Vec<Event>> {
        info!("Downloading export snapshot from {}", reference.url);
        let content = http::get_bytes(&self.client, &reference.url).await?;
        if content.len() as u64 != reference.size {
            debug!(
                "Downloaded {} bytes, manifest announced {}",
                content.len(),
                reference.size
            );
        }

        decode_verified_content(&content, reference)
    }

    /// Fetch and decode the latest available events
    pub async fn fetch_latest_events(&self) -> Result<Vec<Event>> {
        let reference = self.fetch_reference().await?;
        self.fetch_events(&reference).await
    }
}

impl Default for SnapshotFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Verify snapshot content and decode its export entry
///
/// Verification runs first; unverified content is never decoded. An archive
/// without an export entry yields an empty result, and decoding preserves
/// the physical row order of the entry.
pub fn decode_verified_content(
    content: &[u8],
    reference: &SnapshotReference,
) -> Result<Vec<Event>> {
    verify::check_md5(content, &reference.md5_sum)?;

    let Some(entry) = archive::read_export_entry(content)? else {
        info!("No export CSV entry in archive, returning empty result");
        return Ok(Vec::new());
    };

    debug!(
        "Decoding export entry '{}' ({} bytes)",
        entry.name,
        entry.data.len()
    );
    let events = EventCsvReader::new(entry.data.as_slice()).read_all()?;
    info!("Decoded {} events from '{}'", events.len(), entry.name);
    Ok(events)
}

/// Fetch and decode the latest events using the default manifest URL
pub async fn get_latest_events() -> Result<Vec<Event>> {
    SnapshotFetcher::new().fetch_latest_events().await
}
