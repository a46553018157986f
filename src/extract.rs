// src/extract.rs

use anyhow::{Context, Result};
use lopdf::Document;
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info};

use crate::fetch::download_to_tempfile;

/// Download the bulletin and return its normalized text, one entry per page.
/// The temporary copy of the PDF is gone by the time this returns.
pub async fn fetch_pages(client: &Client, url: &str) -> Result<Vec<String>> {
    let tmp = download_to_tempfile(client, url).await?;
    let pages = extract_pages(tmp.path());
    tmp.close().context("removing temporary bulletin file")?;
    pages
}

/// Extract and normalize the text of every page of the PDF at `path`, in page order.
pub fn extract_pages(path: &Path) -> Result<Vec<String>> {
    let doc =
        Document::load(path).with_context(|| format!("loading PDF {}", path.display()))?;

    // get_pages is keyed by 1-based page number, already sorted
    let pages = doc.get_pages();
    let mut out = Vec::with_capacity(pages.len());
    for &page_num in pages.keys() {
        let raw = doc
            .extract_text(&[page_num])
            .with_context(|| format!("extracting text from page {}", page_num))?;
        let text = normalize_page_text(&raw);
        debug!(page = page_num, chars = text.len(), "extracted page");
        out.push(text);
    }

    info!(pages = out.len(), "extracted bulletin text");
    Ok(out)
}

/// Collapse every whitespace run (newlines included) to one space and lowercase.
pub fn normalize_page_text(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
