// src/output/store.rs

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use super::VaccinationRow;
use crate::error::BulletinError;

/// What `increment` did to the location's file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementOutcome {
    Appended,
    /// A row for the same date existed and was overwritten.
    Replaced,
}

/// Directory of `<location>.csv` files, one row per (location, date).
pub struct DatasetStore {
    dir: PathBuf,
}

impl DatasetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, location: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", location))
    }

    /// All rows stored for `location`, oldest first. Missing file → empty.
    pub fn load(&self, location: &str) -> Result<Vec<VaccinationRow>> {
        let path = self.path_for(location);
        if !path.exists() {
            return Ok(Vec::new());
        }
        read_rows(&path)
    }

    /// Add `row` to its location's file, replacing any row with the same date,
    /// and rewrite the file sorted by date.
    pub fn increment(&self, row: &VaccinationRow) -> Result<IncrementOutcome> {
        validate(row)?;

        let path = self.path_for(&row.location);
        let mut rows = self.load(&row.location)?;
        let before = rows.len();
        rows.retain(|r| r.date != row.date);
        let outcome = if rows.len() < before {
            IncrementOutcome::Replaced
        } else {
            IncrementOutcome::Appended
        };

        rows.push(row.clone());
        rows.sort_by_key(|r| r.date);

        // write to tmp file, then rename over the original
        let tmp_path = self.dir.join(format!(".{}.csv.tmp", row.location));
        write_rows(&tmp_path, &rows)?;
        fs::rename(&tmp_path, &path).with_context(|| {
            format!("renaming {} -> {}", tmp_path.display(), path.display())
        })?;

        info!(
            location = %row.location,
            date = %row.date,
            total_vaccinations = row.total_vaccinations,
            people_vaccinated = row.people_vaccinated,
            people_fully_vaccinated = row.people_fully_vaccinated,
            ?outcome,
            "stored row"
        );
        Ok(outcome)
    }
}

fn validate(row: &VaccinationRow) -> Result<(), BulletinError> {
    if row.location.trim().is_empty() {
        return Err(BulletinError::InvalidRow("location is empty".into()));
    }
    if row.vaccine.trim().is_empty() {
        return Err(BulletinError::InvalidRow("vaccine is empty".into()));
    }
    let tomorrow = Utc::now().date_naive() + Duration::days(1);
    if row.date > tomorrow {
        return Err(BulletinError::InvalidRow(format!(
            "date {} is in the future",
            row.date
        )));
    }
    Ok(())
}

fn read_rows(path: &Path) -> Result<Vec<VaccinationRow>> {
    let mut rdr =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    rdr.deserialize()
        .collect::<Result<Vec<VaccinationRow>, _>>()
        .with_context(|| format!("parsing {}", path.display()))
}

fn write_rows(path: &Path, rows: &[VaccinationRow]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        wtr.serialize(row)
            .with_context(|| format!("writing row to {}", path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
