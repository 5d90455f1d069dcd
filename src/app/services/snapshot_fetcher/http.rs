//! Plain HTTP GET helpers for manifest and snapshot downloads
//!
//! Single-shot requests with no retry or resumption; transport failures and
//! non-success statuses are fatal and carry the request URL.

use reqwest::Client;
use tracing::debug;

use crate::{Error, Result};

/// Fetch the full byte content of a URL
pub async fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::http(url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::http_status(url, status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::http(url, format!("read whole body: {e}")))?;

    debug!("HTTP GET {} returned {} bytes", url, body.len());
    Ok(body.to_vec())
}

/// Fetch the content of a URL as UTF-8 text
pub async fn get_text(client: &Client, url: &str) -> Result<String> {
    let bytes = get_bytes(client, url).await?;
    String::from_utf8(bytes)
        .map_err(|e| Error::http(url, format!("response body is not valid UTF-8: {e}")))
}
