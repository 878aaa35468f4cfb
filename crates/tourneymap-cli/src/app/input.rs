//! Line commands for the interactive `browse` prompt.

use super::AppEvent;

pub(crate) const HELP_TEXT: &str = "\
commands:
  year <YEAR>     show tournaments for YEAR
  near <PLACE>    only show tournaments within 30 miles of PLACE
  near            clear the location filter
  help            show this message
  quit            exit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum InputCommand {
    Event(AppEventKind),
    Help,
    Unknown(String),
}

/// Event-producing commands, kept separate from [`AppEvent`] so parsing can
/// be compared in tests.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AppEventKind {
    Year(String),
    Search(String),
    Quit,
}

impl AppEventKind {
    pub(crate) fn into_event(self) -> AppEvent {
        match self {
            AppEventKind::Year(year) => AppEvent::YearSelected(year),
            AppEventKind::Search(query) => AppEvent::SearchSubmitted(query),
            AppEventKind::Quit => AppEvent::Shutdown,
        }
    }
}

/// Parses one prompt line. Blank lines yield `None`.
pub(crate) fn parse_command(line: &str) -> Option<InputCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    let command = match word.to_ascii_lowercase().as_str() {
        "year" | "y" if !rest.is_empty() => {
            InputCommand::Event(AppEventKind::Year(rest.to_string()))
        }
        "near" | "n" | "search" => InputCommand::Event(AppEventKind::Search(rest.to_string())),
        "clear" => InputCommand::Event(AppEventKind::Search(String::new())),
        "quit" | "exit" | "q" => InputCommand::Event(AppEventKind::Quit),
        "help" | "?" => InputCommand::Help,
        _ => InputCommand::Unknown(line.to_string()),
    };
    Some(command)
}
