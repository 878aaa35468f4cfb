//! Domain types and the pure filtering/rendering pipeline for the tournament map.
//!
//! Nothing in this crate performs I/O apart from reading environment
//! variables in [`load_app_config`]. Loading the data file and geocoding
//! live in `tourneymap-store` and `tourneymap-geocoder`.

pub mod app_config;
pub mod config;
pub mod proximity;
pub mod render;
pub mod tournament;
pub mod view;
pub mod years;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use proximity::{distance_meters, within_radius, SEARCH_RADIUS_METERS};
pub use render::{render, FilterState, ListEntry, MapMarker, RenderOutput};
pub use tournament::{Coordinate, TournamentRecord};
pub use view::{Viewport, DEFAULT_VIEWPORT, SEARCH_ZOOM, TILE_ATTRIBUTION, TILE_URL_TEMPLATE};
pub use years::{default_year, distinct_years};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
