// Typed access to the marketplace API endpoints.

use reqwest::Client;
use serde_json::Value;

use crate::{config::Settings, error::ScrapeError};

/// Shared HTTP client plus the settings that shape request URLs. Built
/// once and handed to the paginator and fetcher; pointing
/// `Settings.api_base_url` at a local server substitutes the whole
/// network layer in tests.
#[derive(Debug, Clone)]
pub struct MarketApi {
    client: Client,
    settings: Settings,
}

impl MarketApi {
    pub fn new(settings: Settings) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// One page of search results for `query`.
    pub async fn search_page(
        &self,
        query: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Value, ScrapeError> {
        let url = format!(
            "{}/sites/{}/search",
            self.settings.api_base_url, self.settings.site_id
        );
        let limit = limit.to_string();
        let offset = offset.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::BadStatus { status });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ScrapeError::MalformedResponse(format!("search page body: {e}")))
    }

    /// Detail body for one item identifier.
    pub async fn item_detail(&self, item_id: &str) -> Result<Value, ScrapeError> {
        let url = format!("{}/items/{}", self.settings.api_base_url, item_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::BadStatus { status });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ScrapeError::MalformedResponse(format!("item detail body: {e}")))
    }
}
