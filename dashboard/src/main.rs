mod app;
mod client;
mod error;
mod model;
mod terminal;
mod ui;
mod views;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app::{Action, App};
use client::http::HttpBackend;
use client::worker::{self, Completion};
use client::Backend;
use terminal::TerminalGuard;
use ui::theme::ColorScheme;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
}

#[derive(Parser)]
#[command(name = "hostel-dashboard", about = "Terminal admin dashboard for the hostel management backend")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:8000")]
    backend: String,

    /// Color theme
    #[arg(long, default_value = "dark", value_enum)]
    theme: ThemeChoice,

    /// Write diagnostics to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("hostel_dashboard=info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(ref path) = cli.log_file {
        init_logging(path)?;
    }
    let colors = match cli.theme {
        ThemeChoice::Dark => ColorScheme::dark(),
        ThemeChoice::Light => ColorScheme::light(),
    };

    let http = HttpBackend::new(&cli.backend).context("building HTTP client")?;
    let backend_url = http.base_url().to_string();
    let backend: Arc<dyn Backend> = Arc::new(http);
    info!(backend = %backend_url, "starting dashboard");

    // Restored when the guard drops
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run(&mut terminal, backend, &backend_url, &colors);
    drop(guard);
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    backend: Arc<dyn Backend>,
    backend_url: &str,
    colors: &ColorScheme,
) -> anyhow::Result<()> {
    let mut app = App::new();
    let (tx, rx): (Sender<Completion>, Receiver<Completion>) = mpsc::channel();

    for (panel, request) in app.startup_requests() {
        worker::dispatch(Arc::clone(&backend), tx.clone(), panel, request);
    }

    // Main event loop
    let poll_timeout = Duration::from_millis(100);

    loop {
        // Apply finished calls in arrival order
        while let Ok(completion) = rx.try_recv() {
            let panel = completion.panel;
            if let Err(err) = app.complete(completion) {
                warn!(?panel, error = %err, "request failed");
            }
        }

        terminal.draw(|frame| ui::draw(frame, &mut app, backend_url, colors))?;

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_key(key) {
                    Action::Quit => break,
                    Action::Send(panel, request) => {
                        worker::dispatch(Arc::clone(&backend), tx.clone(), panel, request);
                    }
                    Action::None => {}
                }
            }
        }
    }

    Ok(())
}
