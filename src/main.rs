//! A terminal picker for notebook servers.
//!
//! Browse the server's files, select one, and open it as a session. The
//! session URL is printed on stdout when the picker exits.

mod app;
mod client;
mod config;
mod core;
mod error;
mod ui;

use std::io::{self, stderr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use tokio::sync::mpsc;
use url::Url;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler::{self, Command},
    remote_runtime::{self, RemoteUpdate},
    state::AppState,
};
use crate::client::HttpBackend;
use crate::config::AppConfig;
use crate::core::cursor::CursorState;
use crate::core::remote::{DirectoryLister, SessionService};
use crate::error::PickerError;
use crate::ui::{
    entry_list::EntryList, layout::AppLayout, path_bar::PathBar, spinner::BusyIndicator, theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Pick a notebook on a server and open it as a session")]
struct Cli {
    /// Notebook server URL (overrides the config file).
    #[arg(long)]
    server: Option<Url>,

    /// Directory to list first (defaults to the server's root).
    #[arg(long)]
    path: Option<String>,

    /// Print the effective configuration and exit.
    #[arg(long = "print-config")]
    print_config: bool,

    /// Save the effective configuration to the config file and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

// ───────────────────────────────────────── terminal ─────────

/// Raw mode plus alternate screen on stderr. Restored on drop, so an early
/// `?` out of the event loop still hands back a usable terminal.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(stderr(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stderr(), LeaveAlternateScreen, DisableMouseCapture, cursor::Show);
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    if cli.print_config {
        print!("{}", config.serialise());
        return Ok(());
    }
    if cli.write_config {
        let path = crate::config::config_path();
        config.save_to(&path).with_context(|| format!("cannot write {}", path.display()))?;
        eprintln!("wrote {}", path.display());
        return Ok(());
    }

    // ── initial listing ───────────────────────────────────────
    let backend = Arc::new(
        HttpBackend::new(&config.server_url, config.request_timeout)
            .context("failed to build HTTP client")?,
    );
    let lister: Arc<dyn DirectoryLister> = backend.clone();
    let sessions: Arc<dyn SessionService> = backend.clone();

    let path = cli.path.as_deref();
    let listing = lister
        .list(path)
        .await
        .map_err(|e| PickerError::listing(path, e))
        .with_context(|| format!("cannot reach notebook server at {}", backend.base_url()))?;
    tracing::debug!(path = %listing.path, entries = listing.entries.len(), "initial listing");

    let mut state = AppState::new(CursorState::from_listing(listing), config);

    // ── terminal setup ────────────────────────────────────────
    let guard = TerminalGuard::enter()?;
    let backend_term = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend_term)?;

    // ── async channels ────────────────────────────────────────
    let mut events = spawn_event_reader(Duration::from_millis(100));
    let (remote_tx, mut remote_rx) = mpsc::unbounded_channel::<RemoteUpdate>();

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| {
            state.terminal_area = frame.area();
            let layout = AppLayout::from_area(frame.area());

            frame.render_widget(
                Paragraph::new("Notebooks").style(Theme::title_style()),
                layout.header_area,
            );

            frame.render_widget(
                PathBar {
                    path: state.cursor.path(),
                    selected_name: state.cursor.selected().map(|e| e.name.as_str()),
                    can_open: state.cursor.can_commit() && !state.is_busy(),
                    button_area: layout.open_button_area,
                },
                layout.path_area,
            );

            let list_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border_style());
            frame.render_stateful_widget(
                EntryList::new(&state.cursor).block(list_block),
                layout.list_area,
                &mut state.list_state,
            );

            let busy_label = if state.committing {
                Some("opening")
            } else if state.pending_listing.is_some() {
                Some("loading")
            } else {
                None
            };
            frame.render_widget(
                BusyIndicator {
                    label: busy_label,
                    tick: state.tick,
                },
                layout.list_area,
            );

            let hint = state.config.status_bar_hint();
            let status = match state.status_message.as_deref() {
                Some(message) => Paragraph::new(message).style(Theme::error_style()),
                None => Paragraph::new(hint.as_str()).style(Theme::status_bar_style()),
            };
            frame.render_widget(status, layout.status_area);
        })?;

        let command = tokio::select! {
            biased;

            Some(event) = events.recv() => match event {
                AppEvent::Key(k) => handler::handle_key(&mut state, k),
                AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                AppEvent::Resize => None,
                AppEvent::Tick => {
                    if state.is_busy() {
                        state.tick = state.tick.wrapping_add(1);
                    }
                    None
                }
            },

            Some(update) = remote_rx.recv() => {
                match update {
                    RemoteUpdate::Activated { generation, result } => {
                        state.finish_listing(generation, result);
                    }
                    RemoteUpdate::Navigate { destination } => state.navigate(destination),
                    RemoteUpdate::CommitFailed(e) => state.fail_commit(e.to_string()),
                }
                None
            }

            else => {
                state.should_quit = true;
                None
            }
        };

        match command {
            Some(Command::Activate { generation, from, entry }) => {
                remote_runtime::spawn_activation(remote_tx.clone(), lister.clone(), generation, from, entry);
            }
            Some(Command::Commit(cursor)) => {
                remote_runtime::spawn_commit(remote_tx.clone(), sessions.clone(), cursor);
            }
            None => {}
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    drop(terminal);
    drop(guard);

    if let Some(ref destination) = state.destination {
        println!("{}", backend.url_for(destination)?);
    }

    Ok(())
}
