//! One-shot loader for the tournament data file.
//!
//! Reads the JSON array from a URL or a local path. A failure is reported
//! once and never retried; callers keep an empty store in that case.

use std::time::Duration;

use reqwest::{Client, Url};
use tourneymap_core::TournamentRecord;

use crate::error::LoadError;
use crate::source::DataSource;

pub struct StoreLoader {
    client: Client,
}

impl StoreLoader {
    /// Creates a loader with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Loads every record from `source`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Http`] on network failure.
    /// - [`LoadError::UnexpectedStatus`] on a non-2xx response.
    /// - [`LoadError::Io`] if a local file cannot be read.
    /// - [`LoadError::Deserialize`] if the body is not a JSON array of records.
    pub async fn load(&self, source: &DataSource) -> Result<Vec<TournamentRecord>, LoadError> {
        tracing::debug!(source = %source, "loading tournament data");
        let body = match source {
            DataSource::Remote(url) => self.fetch_remote(url).await?,
            DataSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| LoadError::Io {
                        path: path.display().to_string(),
                        source: e,
                    })?
            }
        };

        let records = parse_records(&body, &source.to_string())?;
        tracing::info!(
            source = %source,
            count = records.len(),
            "loaded tournament data"
        );
        Ok(records)
    }

    async fn fetch_remote(&self, url: &Url) -> Result<String, LoadError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Parses the data file body. The top level must be an array.
///
/// # Errors
///
/// Returns [`LoadError::Deserialize`] if `body` is not a JSON array of
/// tournament objects.
pub fn parse_records(body: &str, context: &str) -> Result<Vec<TournamentRecord>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
