// src/output/row.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated observation for one location, as stored in `<location>.csv`.
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationRow {
    pub location: String,
    pub date: NaiveDate,
    pub vaccine: String,
    pub source_url: String,
    pub total_vaccinations: u64,
    pub people_vaccinated: u64,
    pub people_fully_vaccinated: u64,
}

impl VaccinationRow {
    /// A parsed row with no location or vaccine attached yet.
    pub fn parsed(
        date: NaiveDate,
        source_url: impl Into<String>,
        total_vaccinations: u64,
        people_vaccinated: u64,
        people_fully_vaccinated: u64,
    ) -> Self {
        Self {
            location: String::new(),
            date,
            vaccine: String::new(),
            source_url: source_url.into(),
            total_vaccinations,
            people_vaccinated,
            people_fully_vaccinated,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_vaccine(mut self, vaccine: impl Into<String>) -> Self {
        self.vaccine = vaccine.into();
        self
    }
}
