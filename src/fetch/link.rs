// src/fetch/link.rs

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::info;
use url::Url;

use crate::error::BulletinError;

/// Bulletin filenames look like `.../KENYA-COVID-19-IMMUNIZATION-STATUS-REPORT-...pdf`.
pub const PDF_HREF_PATTERN: &str = ".*IMMUNIZATION.*pdf$";

static PDF_HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(PDF_HREF_PATTERN).expect("bulletin href regex should compile"));

static ANCHORS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector should parse"));

/// Fetch the landing page and return the URL of the first bulletin PDF it links to.
pub async fn resolve_pdf_link(client: &Client, landing_url: &str) -> Result<String> {
    let html = client
        .get(landing_url)
        .send()
        .await
        .with_context(|| format!("GET {}", landing_url))?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("reading body from {}", landing_url))?;

    let base = Url::parse(landing_url).with_context(|| format!("parsing URL {}", landing_url))?;
    let link = find_pdf_link(&html, &base)?;
    info!(link = %link, "resolved bulletin link");
    Ok(link)
}

/// First anchor (in document order) whose href matches [`PDF_HREF_PATTERN`],
/// resolved against `base`.
pub fn find_pdf_link(html: &str, base: &Url) -> Result<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHORS)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| PDF_HREF.is_match(href))
        .map(|href| {
            base.join(href)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| href.to_string())
        })
        .ok_or_else(|| {
            BulletinError::LinkNotFound {
                page: base.to_string(),
                pattern: PDF_HREF_PATTERN.to_string(),
            }
            .into()
        })
}
