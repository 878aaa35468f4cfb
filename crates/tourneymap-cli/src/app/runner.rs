use tokio::sync::mpsc::UnboundedReceiver;
use tourneymap_geocoder::Geocode;

use super::{App, AppEvent};
use crate::frontend::Frontend;

/// Drains the event queue one event at a time until shutdown.
///
/// Each event is fully handled and its effects drawn before the next one is
/// taken, so no two renders interleave.
///
/// # Errors
///
/// Returns an error if the front end fails to write its output.
pub(crate) async fn run<G, F>(
    app: &mut App<G>,
    events: &mut UnboundedReceiver<AppEvent>,
    frontend: &mut F,
) -> anyhow::Result<()>
where
    G: Geocode + 'static,
    F: Frontend,
{
    while let Some(event) = events.recv().await {
        for effect in app.handle(event) {
            frontend.apply(&effect)?;
        }
        if app.is_finished() {
            break;
        }
    }
    frontend.finish()
}
