//! HTTP client for a Nominatim-style `search` endpoint.
//!
//! Every lookup asks for at most one result within a fixed country scope.
//! Empty queries never reach the network.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use tourneymap_core::Coordinate;

use crate::error::GeocodeError;
use crate::types::NominatimPlace;

/// Resolves a free-text place name to a coordinate.
///
/// Implemented by [`GeocoderClient`]; the application layer is generic over
/// it so lookups can be replaced in tests.
pub trait Geocode: Send + Sync {
    fn resolve(&self, query: &str)
        -> impl Future<Output = Result<Coordinate, GeocodeError>> + Send;
}

/// Client for the geocoding service.
///
/// Use [`GeocoderClient::new`] with the configured search URL, or point it at
/// a mock server in tests.
pub struct GeocoderClient {
    client: Client,
    search_url: Url,
    country_codes: String,
}

impl GeocoderClient {
    /// Creates a client for `search_url` restricted to `country_codes`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Client`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidUrl`] if `search_url`
    /// does not parse.
    pub fn new(
        search_url: &str,
        country_codes: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(GeocodeError::Client)?;

        let search_url = Url::parse(search_url).map_err(|e| GeocodeError::InvalidUrl {
            url: search_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            search_url,
            country_codes: country_codes.to_owned(),
        })
    }

    /// Looks up `query` and returns the first match.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::NotFound`] if the query is blank or the service
    ///   returns no places.
    /// - [`GeocodeError::Unavailable`] on network failure, a non-2xx status,
    ///   a malformed body, or coordinates that are not numbers.
    pub async fn search(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::NotFound {
                query: String::new(),
            });
        }

        let url = self.build_url(query);
        tracing::debug!(query, "geocoding location");

        let places = self.request_places(&url).await?;
        let Some(place) = places.into_iter().next() else {
            tracing::info!(query, "geocoder returned no results");
            return Err(GeocodeError::NotFound {
                query: query.to_string(),
            });
        };

        let coordinate = parse_place(&place)?;
        tracing::info!(
            query,
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            display_name = place.display_name.as_deref().unwrap_or_default(),
            "geocoded location"
        );
        Ok(coordinate)
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1")
            .append_pair("countrycodes", &self.country_codes);
        url
    }

    async fn request_places(&self, url: &Url) -> Result<Vec<NominatimPlace>, GeocodeError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| GeocodeError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "geocoder returned an error status");
            return Err(GeocodeError::Unavailable(format!(
                "unexpected HTTP status {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::Unavailable(e.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|e| GeocodeError::Unavailable(format!("malformed response: {e}")))
    }
}

impl Geocode for GeocoderClient {
    async fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        self.search(query).await
    }
}

fn parse_place(place: &NominatimPlace) -> Result<Coordinate, GeocodeError> {
    let parse = |field: &str, raw: &str| -> Result<f64, GeocodeError> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| GeocodeError::Unavailable(format!("invalid {field} '{raw}'")))
    };
    Ok(Coordinate::new(
        parse("lat", &place.lat)?,
        parse("lon", &place.lon)?,
    ))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
