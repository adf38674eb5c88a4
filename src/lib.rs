//! Marketplace search/export utility: paginates a public search API,
//! fetches per-item details concurrently, and normalizes the results
//! into flat records for CSV export.

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod models;
pub mod paginator;

pub use client::MarketApi;
pub use config::Settings;
pub use error::ScrapeError;
pub use models::ItemRecord;
