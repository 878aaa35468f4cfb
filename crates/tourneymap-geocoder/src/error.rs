use thiserror::Error;

/// Errors returned by the geocoding client.
///
/// [`GeocodeError::NotFound`] and [`GeocodeError::Unavailable`] are the two
/// lookup outcomes callers report to the user. The remaining variants can only
/// occur while constructing a [`crate::GeocoderClient`].
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The service answered but had no match for the query.
    #[error("no location found for '{query}'")]
    NotFound { query: String },

    /// Transport failure, non-2xx status, or an unreadable response body.
    #[error("geocoding service unavailable: {0}")]
    Unavailable(String),

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid geocoder URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl GeocodeError {
    /// True for the outcomes of a lookup, as opposed to client setup errors.
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Unavailable(_))
    }
}
