use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{clean_count, table::extract_jj_doses};
use crate::error::BulletinError;

static ADULT_COUNTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"total doses administered above 18 ye?a?rs ([\d,.]+) ",
        r"total partially vaccinated above 18 ye?a?rs ([\d,.]+) ",
        r"total fully vaccinated above 18 yrs ([\d,.]+)",
    ))
    .expect("adult counters regex should compile")
});

static TEEN_FIRST_DOSES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"15-18 yrs received first dose \(pfizer vaccine\) ([\d,]+)")
        .expect("teen doses regex should compile")
});

/// Raw counters read off the bulletin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub adults_total_vaccinations: u64,
    pub adults_partially_vaccinated: u64,
    pub people_fully_vaccinated: u64,
    pub teenagers_first_doses: u64,
    pub jj_doses: u64,
}

impl Metrics {
    pub fn total_vaccinations(&self) -> Result<u64, BulletinError> {
        self.adults_total_vaccinations
            .checked_add(self.teenagers_first_doses)
            .ok_or(BulletinError::CountOverflow("total_vaccinations"))
    }

    /// J&J is single-dose: its recipients count as fully vaccinated in the
    /// bulletin but never show up among the partially vaccinated, so they are
    /// added back here.
    pub fn people_vaccinated(&self) -> Result<u64, BulletinError> {
        self.adults_partially_vaccinated
            .checked_add(self.jj_doses)
            .and_then(|n| n.checked_add(self.teenagers_first_doses))
            .ok_or(BulletinError::CountOverflow("people_vaccinated"))
    }
}

/// Total administered, partially and fully vaccinated adults, from page one.
pub fn parse_adult_counters(page: &str) -> Result<(u64, u64, u64), BulletinError> {
    let caps = ADULT_COUNTERS
        .captures(page)
        .ok_or(BulletinError::MissingField("adult counters"))?;
    Ok((
        clean_count(&caps[1])?,
        clean_count(&caps[2])?,
        clean_count(&caps[3])?,
    ))
}

pub fn parse_teen_first_doses(page: &str) -> Result<u64, BulletinError> {
    let caps = TEEN_FIRST_DOSES
        .captures(page)
        .ok_or(BulletinError::MissingField("teenagers first doses"))?;
    clean_count(&caps[1])
}

/// All counters. Page one carries the headline figures; table 5 may be anywhere.
pub fn parse_metrics(pages: &[String]) -> Result<Metrics, BulletinError> {
    let first = pages.first().ok_or(BulletinError::MissingField("page 1"))?;

    let (adults_total_vaccinations, adults_partially_vaccinated, people_fully_vaccinated) =
        parse_adult_counters(first)?;
    let teenagers_first_doses = parse_teen_first_doses(first)?;
    let jj_doses = extract_jj_doses(pages)?;

    let metrics = Metrics {
        adults_total_vaccinations,
        adults_partially_vaccinated,
        people_fully_vaccinated,
        teenagers_first_doses,
        jj_doses,
    };
    debug!(?metrics, "parsed counters");
    Ok(metrics)
}
