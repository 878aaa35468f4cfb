//! Map view constants and the viewport the front end should display.

use serde::Serialize;

use crate::tournament::Coordinate;

/// Standard OpenStreetMap slippy-map tile template.
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const TILE_MAX_ZOOM: u8 = 19;

pub const TILE_ATTRIBUTION: &str = "\u{a9} OpenStreetMap contributors";

/// Zoom applied when focusing on a geocoded search location.
pub const SEARCH_ZOOM: u8 = 9;

/// Continental US overview.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    center: Coordinate {
        latitude: 39.828_3,
        longitude: -98.579_5,
    },
    zoom: 4,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

impl Viewport {
    /// Viewport centred on a search result.
    #[must_use]
    pub fn focused_on(center: Coordinate) -> Self {
        Self {
            center,
            zoom: SEARCH_ZOOM,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        DEFAULT_VIEWPORT
    }
}
