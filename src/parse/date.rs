use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BulletinError;

/// Page one opens with e.g. "... vaccine doses dispensed as at friday, 14th january 2022".
static DATE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"vaccine doses dispensed as at (day )?[a-z]+,? ([0-9a-z]+,? [a-z]+ 202\d)")
        .expect("date regex should compile")
});

static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})(st|nd|rd|th)$").expect("ordinal regex should compile"));

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "mon", "tue",
    "tues", "wed", "thu", "thur", "thurs", "fri", "sat", "sun",
];

/// Publication date from normalized page-one text.
pub fn parse_date(page: &str) -> Result<NaiveDate, BulletinError> {
    let caps = DATE_LINE
        .captures(page)
        .ok_or(BulletinError::MissingField("date"))?;
    parse_date_phrase(&caps[2])
}

/// Parse a loosely written date such as `"Friday, 14th January 2022"` or `"january 14, 2022"`.
pub fn parse_date_phrase(phrase: &str) -> Result<NaiveDate, BulletinError> {
    let lowered = phrase.to_lowercase().replace(',', " ");
    let cleaned = lowered
        .split_whitespace()
        .filter(|tok| !WEEKDAYS.contains(tok))
        .map(|tok| match ORDINAL.captures(tok) {
            Some(c) => c[1].to_string(),
            None => tok.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    ["%d %B %Y", "%B %d %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .ok_or_else(|| BulletinError::InvalidDate(phrase.to_string()))
}
