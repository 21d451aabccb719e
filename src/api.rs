use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use tracing::debug;

use crate::models::{CountryRef, RawDailyReport};

const DEFAULT_BASE_URL: &str = "https://api.covid19api.com";
const USER_AGENT: &str = concat!("covid-case-tracker/", env!("CARGO_PKG_VERSION"));

/// Thin client over the public case-report feed. The core never does I/O
/// itself; this collaborator hands it raw series to validate.
pub struct CovidApi {
    client: Client,
    base_url: String,
}

impl CovidApi {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches the region catalog. Unsorted; the caller orders it for
    /// display.
    pub async fn fetch_countries(&self) -> anyhow::Result<Vec<CountryRef>> {
        let url = format!("{}/countries", self.base_url);
        debug!(%url, "fetching country catalog");

        let countries = self
            .client
            .get(&url)
            .send()
            .await
            .context("country catalog request failed")?
            .error_for_status()
            .context("country catalog request rejected")?
            .json::<Vec<CountryRef>>()
            .await
            .context("country catalog response was not valid JSON")?;

        Ok(countries)
    }

    /// Fetches the full daily report series for one region. The feed may
    /// deliver malformed or empty data; validation happens downstream in
    /// the normalization step.
    pub async fn fetch_report_series(&self, slug: &str) -> anyhow::Result<Vec<RawDailyReport>> {
        let url = format!("{}/total/country/{}", self.base_url, slug);
        debug!(%url, "fetching report series");

        let series = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("report series request for {slug} failed"))?
            .error_for_status()
            .with_context(|| format!("report series request for {slug} rejected"))?
            .json::<Vec<RawDailyReport>>()
            .await
            .with_context(|| format!("report series for {slug} was not valid JSON"))?;

        Ok(series)
    }
}
