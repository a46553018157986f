// src/error.rs

use thiserror::Error;

/// Everything that can go wrong between the landing page and the CSV row.
///
/// Transport and filesystem failures travel as `anyhow` context chains; these
/// variants are the ones a caller may want to tell apart.
#[derive(Debug, Error)]
pub enum BulletinError {
    #[error("no bulletin link matching `{pattern}` on {page}")]
    LinkNotFound { page: String, pattern: String },

    #[error("`{0}` not found in bulletin text")]
    MissingField(&'static str),

    #[error("could not parse `{0}` as a date")]
    InvalidDate(String),

    #[error("could not parse `{0}` as a count")]
    InvalidCount(String),

    #[error("`{0}` does not fit in a 64-bit count")]
    CountOverflow(&'static str),

    #[error("table 5 not found on any page")]
    TableNotFound,

    #[error("header columns of table 5 have changed")]
    TableHeaderChanged,

    #[error("refusing to store row: {0}")]
    InvalidRow(String),
}
