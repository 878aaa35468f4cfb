//! Terminal front end: draws frames, notifications and the page error.

use std::io::Write;

use clap::ValueEnum;
use tourneymap_core::{ListEntry, TILE_ATTRIBUTION};

use crate::app::{Effect, Frame};

/// Something that can display application effects.
pub(crate) trait Frontend {
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn apply(&mut self, effect: &Effect) -> anyhow::Result<()>;

    /// Called once after the event loop stops.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn finish(&mut self) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Whether every frame is drawn or only the one left at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameMode {
    Every,
    LastOnly,
}

pub(crate) struct TerminalFrontend<W: Write> {
    out: W,
    format: OutputFormat,
    mode: FrameMode,
    pending_frame: Option<Frame>,
}

impl<W: Write> TerminalFrontend<W> {
    pub(crate) fn new(out: W, format: OutputFormat, mode: FrameMode) -> Self {
        Self {
            out,
            format,
            mode,
            pending_frame: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, effect: &Effect) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => self.draw_text(effect),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &effect_json(effect))?;
                writeln!(self.out)?;
                Ok(())
            }
        }
    }

    fn draw_text(&mut self, effect: &Effect) -> anyhow::Result<()> {
        let out = &mut self.out;
        match effect {
            Effect::YearOptions { years, selected } => {
                let options: Vec<String> = years
                    .iter()
                    .map(|y| {
                        if y == selected {
                            format!("[{y}]")
                        } else {
                            y.clone()
                        }
                    })
                    .collect();
                writeln!(out, "years: {}", options.join(" "))?;
            }
            Effect::Frame(frame) => write_frame_text(out, frame)?,
            Effect::Alert(message) => writeln!(out, "!! {message}")?,
            Effect::PageError(message) => writeln!(out, "{message}")?,
        }
        Ok(())
    }
}

impl<W: Write> Frontend for TerminalFrontend<W> {
    fn apply(&mut self, effect: &Effect) -> anyhow::Result<()> {
        match (self.mode, effect) {
            (FrameMode::LastOnly, Effect::Frame(frame)) => {
                self.pending_frame = Some(frame.clone());
                Ok(())
            }
            (FrameMode::LastOnly, Effect::YearOptions { .. }) => Ok(()),
            _ => self.draw(effect),
        }
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        if let Some(frame) = self.pending_frame.take() {
            self.draw(&Effect::Frame(frame))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn write_frame_text<W: Write>(out: &mut W, frame: &Frame) -> std::io::Result<()> {
    let output = &frame.output;
    match frame.search_location {
        Some(location) => writeln!(
            out,
            "Tournaments in {} within 30 miles of {location}",
            output.year
        )?,
        None => writeln!(out, "Tournaments in {}", output.year)?,
    }
    writeln!(
        out,
        "map: center {} zoom {}, {} marker(s)",
        frame.viewport.center,
        frame.viewport.zoom,
        output.markers.len()
    )?;
    for marker in &output.markers {
        writeln!(
            out,
            "  * {} @ {}",
            marker.label.replace('\n', " | "),
            marker.position
        )?;
    }
    writeln!(out, "list:")?;
    for entry in &output.list_items {
        match entry {
            ListEntry::Tournament { name, location, .. } => {
                writeln!(out, "  - {name} ({location})")?;
            }
            ListEntry::Placeholder { message } => writeln!(out, "  {message}")?,
        }
    }
    writeln!(out, "map data {TILE_ATTRIBUTION}")?;
    writeln!(out)
}

fn effect_json(effect: &Effect) -> serde_json::Value {
    match effect {
        Effect::YearOptions { years, selected } => serde_json::json!({
            "type": "years",
            "years": years,
            "selected": selected,
        }),
        Effect::Frame(frame) => serde_json::json!({
            "type": "frame",
            "year": frame.output.year,
            "search_location": frame.search_location,
            "viewport": frame.viewport,
            "markers": frame.output.markers,
            "list_items": frame.output.list_items,
        }),
        Effect::Alert(message) => serde_json::json!({ "type": "alert", "message": message }),
        Effect::PageError(message) => serde_json::json!({ "type": "error", "message": message }),
    }
}
