//! piano_scope - click piano keys, watch the waveform
//!
//! Run with: cargo run -- --octave 4

mod app;
mod ui;

use std::{fs::File, io, path::PathBuf, sync::Mutex};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;
use tracing_subscriber::EnvFilter;

use app::App;
use piano_scope::{config::DEFAULT_OCTAVE, ScopeConfig, Session};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Octave selected at start-up (0-8)
    #[arg(short, long, default_value_t = DEFAULT_OCTAVE)]
    octave: u8,

    /// Samples per second of the plotted window
    #[arg(long, default_value_t = piano_scope::config::DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Length of the plotted window in milliseconds
    #[arg(long, default_value_t = 50.0)]
    duration_ms: f64,

    /// Write logs to this file (RUST_LOG controls the level, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = ScopeConfig::default()
        .with_sample_rate(args.sample_rate)
        .with_duration(args.duration_ms / 1000.0)
        .with_default_octave(args.octave);
    let session = Session::new(config).wrap_err("invalid scope settings")?;
    tracing::info!(?config, "starting piano_scope");

    let mut terminal = ratatui::init();
    with_teardown(
        || run(&mut terminal, session),
        || {
            let mouse = execute!(io::stdout(), DisableMouseCapture);
            ratatui::restore();
            mouse
        },
    )
}

/// Set up mouse capture and run the app until it quits.
fn run(terminal: &mut DefaultTerminal, session: Session) -> EyreResult<()> {
    execute!(io::stdout(), EnableMouseCapture).wrap_err("failed to enable mouse capture")?;
    App::new(session).run(terminal)
}

/// Run `body`, then `teardown` whatever `body` returned. A teardown failure is
/// logged; the body's result wins.
fn with_teardown<T>(
    body: impl FnOnce() -> EyreResult<T>,
    teardown: impl FnOnce() -> io::Result<()>,
) -> EyreResult<T> {
    let result = body();
    if let Err(err) = teardown() {
        tracing::warn!("terminal teardown failed: {}", err);
    }
    result
}

/// Logs go to a file or nowhere; stdout belongs to the terminal UI.
fn init_logging(path: Option<&PathBuf>) -> EyreResult<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
