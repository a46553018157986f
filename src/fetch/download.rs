use anyhow::{Context, Result};
use reqwest::Client;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::info;

/// Download `url` into a fresh temporary file.
/// The file is deleted when the returned handle is dropped.
pub async fn download_to_tempfile(client: &Client, url: &str) -> Result<NamedTempFile> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()?;
    let bytes = resp
        .bytes()
        .await
        .with_context(|| format!("reading body from {}", url))?;

    let mut tmp = tempfile::Builder::new()
        .prefix("bulletin-")
        .suffix(".pdf")
        .tempfile()
        .context("creating temporary file for bulletin")?;
    tmp.write_all(&bytes)
        .with_context(|| format!("writing {}", tmp.path().display()))?;
    tmp.flush()?;

    info!(url = %url, bytes = bytes.len(), "downloaded bulletin");
    Ok(tmp)
}
