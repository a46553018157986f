// src/bulletin.rs

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use crate::{
    config::Config,
    extract::fetch_pages,
    fetch::resolve_pdf_link,
    output::{DatasetStore, IncrementOutcome, VaccinationRow},
    parse::{parse_date, parse_metrics},
};

pub const LOCATION: &str = "Kenya";
pub const VACCINES: &str = "Oxford/AstraZeneca, Sputnik V";

/// Kenya Ministry of Health daily vaccination bulletin.
pub struct Kenya {
    client: Client,
    config: Config,
}

impl Kenya {
    pub fn new(config: Config) -> Result<Self> {
        let client = config.http_client()?;
        Ok(Self { client, config })
    }

    pub fn with_client(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Latest bulletin as a parsed row, without location or vaccine.
    pub async fn read(&self) -> Result<VaccinationRow> {
        let url_pdf = resolve_pdf_link(&self.client, &self.config.landing_url)
            .await
            .context("resolving bulletin link")?;
        let pages = fetch_pages(&self.client, &url_pdf)
            .await
            .with_context(|| format!("reading bulletin {}", url_pdf))?;
        parse_pages(&pages, url_pdf)
    }

    pub fn pipe_location(&self, row: VaccinationRow) -> VaccinationRow {
        row.with_location(LOCATION)
    }

    pub fn pipe_vaccine(&self, row: VaccinationRow) -> VaccinationRow {
        row.with_vaccine(VACCINES)
    }

    pub fn pipeline(&self, row: VaccinationRow) -> VaccinationRow {
        self.pipe_vaccine(self.pipe_location(row))
    }

    /// Read, enrich and store the latest bulletin.
    pub async fn to_csv(&self) -> Result<IncrementOutcome> {
        let row = self.pipeline(self.read().await?);
        let store = DatasetStore::new(&self.config.output_dir)?;
        store.increment(&row)
    }
}

/// Date and counters from normalized bulletin pages.
pub fn parse_pages(pages: &[String], source_url: String) -> Result<VaccinationRow> {
    let first = pages.first().map(String::as_str).unwrap_or_default();
    let date = parse_date(first)?;
    let metrics = parse_metrics(pages)?;
    let total_vaccinations = metrics.total_vaccinations()?;
    let people_vaccinated = metrics.people_vaccinated()?;
    info!(
        %date,
        total_vaccinations,
        people_vaccinated,
        people_fully_vaccinated = metrics.people_fully_vaccinated,
        "parsed bulletin"
    );
    Ok(VaccinationRow::parsed(
        date,
        source_url,
        total_vaccinations,
        people_vaccinated,
        metrics.people_fully_vaccinated,
    ))
}
