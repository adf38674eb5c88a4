// Runtime configuration for the scraper.
// Loaded with the 'config' crate, with optional overrides from a
// config.toml file and APP_-prefixed environment variables.

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://api.mercadolibre.com";
pub const DEFAULT_SITE_ID: &str = "MLA";
pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const DEFAULT_CONCURRENCY: usize = 10;
pub const DEFAULT_PAGE_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the marketplace API. Tests point this at a mock server.
    pub api_base_url: String,
    /// Marketplace site identifier used in the search path.
    pub site_id: String,
    /// Results requested per search page.
    pub page_size: usize,
    /// Bounded worker count for the detail fetcher.
    pub concurrency: usize,
    /// Fixed delay between successive search pages, in milliseconds.
    pub page_delay_ms: u64,
    pub user_agent: String,
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let builder = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("site_id", DEFAULT_SITE_ID)?
            .set_default("page_size", DEFAULT_PAGE_SIZE as u64)?
            .set_default("concurrency", DEFAULT_CONCURRENCY as u64)?
            .set_default("page_delay_ms", DEFAULT_PAGE_DELAY_MS)?
            .set_default(
                "user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36",
            )?
            // Load from a configuration file (e.g., config.toml)
            .add_source(File::with_name("config").required(false))
            // Load from environment variables (e.g., APP_API_BASE_URL)
            .add_source(Environment::with_prefix("APP"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            site_id: DEFAULT_SITE_ID.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            concurrency: DEFAULT_CONCURRENCY,
            page_delay_ms: DEFAULT_PAGE_DELAY_MS,
            user_agent: "meli-scraper/0.1".to_string(),
        }
    }
}
