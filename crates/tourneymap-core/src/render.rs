//! Render pipeline: maps the loaded records and the current filter state to
//! the markers, list entries and view change a front end should display.
//!
//! [`render`] is a pure function. Calling it twice with the same inputs
//! yields equal outputs; nothing outside its arguments is consulted.

use serde::Serialize;

use crate::proximity::{within_radius, SEARCH_RADIUS_METERS};
use crate::tournament::{Coordinate, TournamentRecord};
use crate::view::{Viewport, DEFAULT_VIEWPORT};

pub const NO_TOURNAMENTS_FOR_YEAR: &str = "No tournaments found for this year.";
pub const NO_TOURNAMENTS_NEAR_LOCATION: &str =
    "No tournaments found within 30 miles of this location.";

/// The filter inputs consulted before every render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    pub selected_year: String,
    pub search_location: Option<Coordinate>,
}

impl FilterState {
    /// Idle state for `year` with no location filter.
    #[must_use]
    pub fn for_year(year: impl Into<String>) -> Self {
        Self {
            selected_year: year.into(),
            search_location: None,
        }
    }

    /// Changes the year. An active location filter is kept.
    pub fn select_year(&mut self, year: impl Into<String>) {
        self.selected_year = year.into();
    }

    /// Replaces any previous search location.
    pub fn set_location(&mut self, location: Coordinate) {
        self.search_location = Some(location);
    }

    pub fn clear_location(&mut self) {
        self.search_location = None;
    }

    #[must_use]
    pub fn is_located(&self) -> bool {
        self.search_location.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub position: Coordinate,
    /// Popup text; always carries name, location and year.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListEntry {
    Tournament {
        name: String,
        location: String,
        year: String,
    },
    Placeholder {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    /// Year shown in the list heading.
    pub year: String,
    pub markers: Vec<MapMarker>,
    pub list_items: Vec<ListEntry>,
    /// `Some` when the map must move to this viewport, `None` to leave it.
    pub view: Option<Viewport>,
}

impl RenderOutput {
    /// Number of tournaments listed, not counting a placeholder entry.
    #[must_use]
    pub fn tournament_count(&self) -> usize {
        self.list_items
            .iter()
            .filter(|e| matches!(e, ListEntry::Tournament { .. }))
            .count()
    }
}

/// Builds the visible output for `records` under `filter`.
///
/// Records lacking a coordinate are listed but never get a marker. When a
/// location filter is active the view is left alone; otherwise it resets to
/// the default overview.
#[must_use]
pub fn render(records: &[TournamentRecord], filter: &FilterState) -> RenderOutput {
    let survivors: Vec<&TournamentRecord> = records
        .iter()
        .filter(|r| r.year == filter.selected_year)
        .filter(|r| {
            filter
                .search_location
                .is_none_or(|center| within_radius(r, center, SEARCH_RADIUS_METERS))
        })
        .collect();

    let markers = survivors
        .iter()
        .filter_map(|r| {
            r.coordinate().map(|position| MapMarker {
                position,
                label: marker_label(r),
            })
        })
        .collect();

    let list_items = if survivors.is_empty() {
        let message = if filter.is_located() {
            NO_TOURNAMENTS_NEAR_LOCATION
        } else {
            NO_TOURNAMENTS_FOR_YEAR
        };
        vec![ListEntry::Placeholder {
            message: message.to_string(),
        }]
    } else {
        survivors
            .iter()
            .map(|r| ListEntry::Tournament {
                name: r.name.clone(),
                location: r.location.clone(),
                year: r.year.clone(),
            })
            .collect()
    };

    let view = if filter.is_located() {
        None
    } else {
        Some(DEFAULT_VIEWPORT)
    };

    RenderOutput {
        year: filter.selected_year.clone(),
        markers,
        list_items,
        view,
    }
}

fn marker_label(record: &TournamentRecord) -> String {
    format!("{}\n{}\n{}", record.name, record.location, record.year)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
