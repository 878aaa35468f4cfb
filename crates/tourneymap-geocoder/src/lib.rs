//! Free-text place lookup against a Nominatim-compatible geocoding service.

pub mod client;
pub mod error;
pub mod types;

pub use client::{Geocode, GeocoderClient};
pub use error::GeocodeError;
