use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use super::clean_count;
use crate::error::BulletinError;

const TABLE_5_MARKER: &str =
    "table 5: fully vaccinated vs. partially vaccinated above 18 years by priority group";

static TABLE_5_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"priority group johnson & johnson dose 2 uptake total fully vaccinated ",
        r"\(j&j \+ dose 2 uptake\) partially vaccinated \(dose 1 uptake\) % dose 2 uptake",
    ))
    .expect("table 5 header regex should compile")
});

static TABLE_5_TOTAL_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"total ([\d,]+) (?:[\d,]+) (?:[\d,]+) (?:[\d,]+) (?:[\d.]+)% table 5 shows percentage of clients",
    )
    .expect("table 5 total row regex should compile")
});

/// Johnson & Johnson doses from the "total" row of table 5.
///
/// Every page carrying the table 5 caption is checked; the header must still
/// read as expected before its figures are trusted. If the caption appears on
/// several pages the last one wins.
pub fn extract_jj_doses(pages: &[String]) -> Result<u64, BulletinError> {
    let mut found = None;
    let mut hits = 0usize;

    for page in pages {
        if !page.contains(TABLE_5_MARKER) {
            continue;
        }
        hits += 1;
        if !TABLE_5_HEADER.is_match(page) {
            return Err(BulletinError::TableHeaderChanged);
        }
        let caps = TABLE_5_TOTAL_ROW
            .captures(page)
            .ok_or(BulletinError::MissingField("jj_doses"))?;
        found = Some(clean_count(&caps[1])?);
    }

    if hits > 1 {
        warn!(pages = hits, "table 5 caption found on several pages, using the last");
    }
    found.ok_or(BulletinError::TableNotFound)
}
