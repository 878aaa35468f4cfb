//! Nominatim `search` response types.
//!
//! The service returns a JSON array of places. Coordinates arrive as strings
//! (`"lat": "30.2711286"`), so they are parsed separately.

use serde::Deserialize;

/// One place from a `format=json` search response.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
