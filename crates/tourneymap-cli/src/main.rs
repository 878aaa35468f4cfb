mod app;
mod frontend;

use std::process::ExitCode;
use std::sync::Arc;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};
use tourneymap_core::{default_year, AppConfig};
use tourneymap_geocoder::GeocoderClient;
use tourneymap_store::{DataSource, StoreLoader, TournamentStore};
use tracing_subscriber::EnvFilter;

use crate::app::{parse_command, App, AppEvent, InputCommand, LoadState, HELP_TEXT};
use crate::frontend::{FrameMode, OutputFormat, TerminalFrontend};

#[derive(Debug, Parser)]
#[command(name = "tourneymap")]
#[command(about = "Browse chess tournaments by year and by distance from a place")]
struct Cli {
    /// Tournament data file: an http(s) URL or a local path
    #[arg(long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the selectable years
    Years,
    /// Render one view and exit
    Show {
        /// Year to show (defaults to the current year when present)
        #[arg(long)]
        year: Option<String>,
        /// Only show tournaments within 30 miles of this place
        #[arg(long)]
        near: Option<String>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Interactive prompt: change year and search locations
    Browse {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = tourneymap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = DataSource::parse(cli.data.as_deref().unwrap_or(&config.data_source));
    tracing::debug!(env = %config.env, source = %source, "starting tourneymap");

    let command = cli.command.unwrap_or(Commands::Browse {
        format: OutputFormat::Text,
    });
    match command {
        Commands::Years => run_years(&config, &source).await,
        Commands::Show { year, near, format } => {
            let mut scripted = Vec::new();
            if let Some(year) = year {
                scripted.push(AppEvent::YearSelected(year));
            }
            if let Some(place) = near {
                scripted.push(AppEvent::SearchSubmitted(place));
            }
            run_session(&config, &source, format, Input::Scripted(scripted)).await
        }
        Commands::Browse { format } => {
            eprintln!("{HELP_TEXT}");
            run_session(&config, &source, format, Input::Prompt).await
        }
    }
}

async fn run_years(config: &AppConfig, source: &DataSource) -> anyhow::Result<ExitCode> {
    let loader = StoreLoader::new(config.request_timeout_secs, &config.user_agent)?;
    let store = TournamentStore::from_records(loader.load(source).await?);
    let years = store.years();
    if years.is_empty() {
        println!("no years found in {source}");
        return Ok(ExitCode::SUCCESS);
    }

    let selected = default_year(&years, current_year());
    for year in &years {
        let marker = if *year == selected { "*" } else { " " };
        println!("{marker} {year}");
    }
    Ok(ExitCode::SUCCESS)
}

enum Input {
    Scripted(Vec<AppEvent>),
    Prompt,
}

async fn run_session(
    config: &AppConfig,
    source: &DataSource,
    format: OutputFormat,
    input: Input,
) -> anyhow::Result<ExitCode> {
    let loader = StoreLoader::new(config.request_timeout_secs, &config.user_agent)?;
    let geocoder = GeocoderClient::new(
        &config.geocoder_url,
        &config.geocoder_country_codes,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(Arc::new(geocoder), tx.clone(), current_year());

    post(&tx, AppEvent::Loaded(loader.load(source).await))?;

    let mode = match input {
        Input::Scripted(events) => {
            for event in events {
                post(&tx, event)?;
            }
            post(&tx, AppEvent::Shutdown)?;
            FrameMode::LastOnly
        }
        Input::Prompt => {
            tokio::spawn(read_prompt(tx.clone()));
            FrameMode::Every
        }
    };
    drop(tx);

    let mut frontend = TerminalFrontend::new(std::io::stdout(), format, mode);
    app::run(&mut app, &mut rx, &mut frontend).await?;

    if app.load_state() == LoadState::Failed {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Reads prompt lines from stdin and posts the resulting events.
async fn read_prompt(tx: UnboundedSender<AppEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin");
                break;
            }
        };

        match parse_command(&line) {
            Some(InputCommand::Event(kind)) => {
                let event = kind.into_event();
                let quit = matches!(event, AppEvent::Shutdown);
                if post(&tx, event).is_err() || quit {
                    return;
                }
            }
            Some(InputCommand::Help) => eprintln!("{HELP_TEXT}"),
            Some(InputCommand::Unknown(text)) => {
                eprintln!("unknown command '{text}', type 'help' for a list");
            }
            None => {}
        }
    }
    post(&tx, AppEvent::Shutdown).ok();
}

fn post(tx: &UnboundedSender<AppEvent>, event: AppEvent) -> anyhow::Result<()> {
    tx.send(event)
        .map_err(|_| anyhow::anyhow!("event queue closed"))
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests;
