//! Terminal entry point.
//!
//! With a subcommand, runs it against the configured store and exits. Without
//! one, takes over the terminal and runs the interactive app:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  current-thread tokio runtime                │
//! │                                              │
//! │   crossterm EventStream ──┐                  │
//! │                           ▼                  │
//! │                   select! loop ── render ──▶ stdout
//! │                           ▲                  │
//! │   NotesController ────────┘                  │
//! │     └─ NotesWorker task (store calls, FIFO)  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n`: New note
//! - `Ctrl+s`: Save
//! - `Ctrl+d`: Delete selected note
//! - `Ctrl+p`: Toggle pin
//! - `Ctrl+o`: Switch color
//! - `Ctrl+r`: Reload
//! - `Ctrl+q`: Quit (asks when there are unsaved changes)
//! - `Ctrl+c`: Quit immediately
//! - `Tab` / `Shift+Tab`: Move focus
//!
//! In the list:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `/`: Search
//! - `Enter`: Edit
//! - `q`: Quit

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{Event as TermEvent, EventStream};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use futures_util::StreamExt;

use simple_notes::cli::{self, Cli, Command};
use simple_notes::observability::init_tracing;
use simple_notes::{map_key, storage, Config, Event, NotesController, Result};

fn main() -> ExitCode {
    let args = Cli::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("simple-notes: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Option<Command>) -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;
    tracing::info!(mode = %config.mode(), data_dir = ?config.data_dir, "starting simple-notes");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match command {
        Some(command) => runtime.block_on(run_command(&config, command)),
        None => runtime.block_on(run_terminal(&config)),
    }
}

async fn run_command(config: &Config, command: Command) -> Result<()> {
    let mut store = storage::open_store(config)?;
    let stdin = io::stdin();
    cli::run(command, store.as_mut(), &mut io::stdout().lock(), &mut stdin.lock()).await
}

async fn run_terminal(config: &Config) -> Result<()> {
    let mut controller = simple_notes::start(config)?;

    setup_terminal()?;
    let result = event_loop(&mut controller).await;
    let restored = restore_terminal();

    tracing::info!(ok = result.is_ok(), "terminal session ended");
    result.and(restored)
}

async fn event_loop(controller: &mut NotesController) -> Result<()> {
    let mut events = EventStream::new();
    let (mut cols, mut rows) = terminal::size()?;

    controller.dispatch(&Event::Load)?;
    draw(controller, rows, cols)?;

    while !controller.should_quit() {
        let should_render = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(TermEvent::Key(key))) => match map_key(controller.state(), key) {
                    Some(event) => controller.dispatch(&event)?,
                    None => false,
                },
                Some(Ok(TermEvent::Resize(new_cols, new_rows))) => {
                    cols = new_cols;
                    rows = new_rows;
                    true
                }
                Some(Ok(_)) => false,
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            response = controller.next_response() => match response {
                Some(response) => controller.apply_response(response)?,
                None => {
                    tracing::warn!("storage worker stopped");
                    break;
                }
            },
        };

        if should_render && !controller.should_quit() {
            draw(controller, rows, cols)?;
        }
    }

    Ok(())
}

fn draw(controller: &NotesController, rows: u16, cols: u16) -> Result<()> {
    let frame = controller.render(usize::from(rows), usize::from(cols));
    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
