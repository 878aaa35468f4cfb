//! Application state and event handling.
//!
//! [`App`] owns the tournament store, the filter state and the current map
//! viewport. Every state change happens inside [`App::handle`], which the
//! runner calls once per event taken off a single queue, so renders never
//! overlap. Geocoding runs as a spawned task that posts its completion back
//! onto the same queue.

mod input;
mod runner;

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tourneymap_core::{
    default_year, render, Coordinate, FilterState, RenderOutput, TournamentRecord, Viewport,
};
use tourneymap_geocoder::{Geocode, GeocodeError};
use tourneymap_store::{LoadError, TournamentStore};

pub(crate) use input::{parse_command, InputCommand, HELP_TEXT};
pub(crate) use runner::run;

/// Everything that can change application state.
#[derive(Debug)]
pub(crate) enum AppEvent {
    /// Completion of the one-shot data load.
    Loaded(Result<Vec<TournamentRecord>, LoadError>),
    YearSelected(String),
    /// Location search submitted; an empty query clears the location filter.
    SearchSubmitted(String),
    GeocodeCompleted {
        query: String,
        result: Result<Coordinate, GeocodeError>,
    },
    /// Stop once outstanding lookups have completed.
    Shutdown,
}

/// What the front end must show in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Effect {
    /// Year options after a successful load, with the initial selection.
    YearOptions { years: Vec<String>, selected: String },
    Frame(Frame),
    /// Blocking notification; state is unchanged.
    Alert(String),
    /// Fatal page-level message.
    PageError(String),
}

/// A rendered view plus the viewport in effect after applying it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Frame {
    pub output: RenderOutput,
    pub viewport: Viewport,
    pub search_location: Option<Coordinate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadState {
    Pending,
    Ready,
    Failed,
}

pub(crate) struct App<G> {
    store: TournamentStore,
    filter: FilterState,
    viewport: Viewport,
    load_state: LoadState,
    current_year: i32,
    geocoder: Arc<G>,
    events: UnboundedSender<AppEvent>,
    pending_lookups: usize,
    shutting_down: bool,
}

impl<G> App<G>
where
    G: Geocode + 'static,
{
    /// `events` must feed the same queue the runner drains; geocode
    /// completions are posted there.
    pub(crate) fn new(
        geocoder: Arc<G>,
        events: UnboundedSender<AppEvent>,
        current_year: i32,
    ) -> Self {
        Self {
            store: TournamentStore::new(),
            filter: FilterState::default(),
            viewport: Viewport::default(),
            load_state: LoadState::Pending,
            current_year,
            geocoder,
            events,
            pending_lookups: 0,
            shutting_down: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[cfg(test)]
    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub(crate) fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[cfg(test)]
    pub(crate) fn pending_lookups(&self) -> usize {
        self.pending_lookups
    }

    /// True once shutdown was requested and no lookup is still in flight.
    pub(crate) fn is_finished(&self) -> bool {
        self.shutting_down && self.pending_lookups == 0
    }

    pub(crate) fn handle(&mut self, event: AppEvent) -> Vec<Effect> {
        match event {
            AppEvent::Loaded(result) => self.on_loaded(result),
            AppEvent::Shutdown => {
                self.shutting_down = true;
                Vec::new()
            }
            AppEvent::GeocodeCompleted { query, result } => {
                self.on_geocode_completed(&query, result)
            }
            AppEvent::YearSelected(_) | AppEvent::SearchSubmitted(_)
                if self.load_state != LoadState::Ready =>
            {
                tracing::warn!(
                    state = ?self.load_state,
                    "ignoring input before data is available"
                );
                Vec::new()
            }
            AppEvent::YearSelected(year) => {
                tracing::debug!(year = %year, "year selected");
                self.filter.select_year(year);
                vec![self.render_frame()]
            }
            AppEvent::SearchSubmitted(query) => self.on_search_submitted(query),
        }
    }

    fn on_loaded(&mut self, result: Result<Vec<TournamentRecord>, LoadError>) -> Vec<Effect> {
        if self.load_state != LoadState::Pending {
            tracing::warn!("ignoring repeated load completion");
            return Vec::new();
        }

        match result {
            Ok(records) => {
                self.store.populate(records);
                self.load_state = LoadState::Ready;

                let years = self.store.years();
                let selected = default_year(&years, self.current_year);
                tracing::info!(
                    records = self.store.len(),
                    years = years.len(),
                    selected = %selected,
                    "tournament data ready"
                );
                self.filter = FilterState::for_year(selected.clone());

                vec![
                    Effect::YearOptions { years, selected },
                    self.render_frame(),
                ]
            }
            Err(e) => {
                tracing::error!(error = %e, "could not load tournament data");
                self.load_state = LoadState::Failed;
                vec![Effect::PageError(format!(
                    "Error: Could not load tournament data ({e})."
                ))]
            }
        }
    }

    fn on_search_submitted(&mut self, query: String) -> Vec<Effect> {
        let query = query.trim().to_string();
        if query.is_empty() {
            tracing::debug!("empty search clears location filter");
            self.filter.clear_location();
            return vec![self.render_frame()];
        }

        self.pending_lookups += 1;
        let geocoder = Arc::clone(&self.geocoder);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = geocoder.resolve(&query).await;
            if events
                .send(AppEvent::GeocodeCompleted { query, result })
                .is_err()
            {
                tracing::debug!("event queue closed before geocode completed");
            }
        });
        Vec::new()
    }

    fn on_geocode_completed(
        &mut self,
        query: &str,
        result: Result<Coordinate, GeocodeError>,
    ) -> Vec<Effect> {
        self.pending_lookups = self.pending_lookups.saturating_sub(1);
        match result {
            Ok(location) => {
                tracing::info!(query, location = %location, "location filter set");
                self.filter.set_location(location);
                self.viewport = Viewport::focused_on(location);
                vec![self.render_frame()]
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "location search failed");
                vec![Effect::Alert(format!(
                    "Could not find location '{query}'. Please try again."
                ))]
            }
        }
    }

    fn render_frame(&mut self) -> Effect {
        let output = render(self.store.records(), &self.filter);
        if let Some(view) = output.view {
            self.viewport = view;
        }
        Effect::Frame(Frame {
            output,
            viewport: self.viewport,
            search_location: self.filter.search_location,
        })
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
