use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kcal::config::Config;
use kcal::runtime::Runtime;
use kcal::ui::{self, CalorieCounter};
use kcal::vdom::Document;

/// Terminal calorie counter.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Config file (default: ~/.config/kcal/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (default: ~/.local/share/kcal/kcal.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Data directory (~/.local/share/kcal/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no user data directory"))?
        .join("kcal");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn load_config(cli: &Cli) -> kcal::Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path),
            None => Ok(Config::default()),
        },
    }
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(path: &Path, default_filter: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli).context("failed to load configuration")?;

    let log_path = match &cli.log_file {
        Some(path) => path.clone(),
        None => get_data_dir()?.join("kcal.log"),
    };
    init_logging(&log_path, &config.log_filter)?;
    info!(version = env!("CARGO_PKG_VERSION"), "kcal starting");

    let document = Document::with_mount_point(&config.mount_point);
    let mut runtime = ui::start(config.labels(), document, &config.mount_point)
        .context("failed to mount the view")?;

    // terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut runtime);

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(rows = runtime.model().rows.len(), "kcal exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime<CalorieCounter>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, runtime))?;

        if let crossterm::event::Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(runtime, key)? {
                break;
            }
        }
    }
    Ok(())
}
