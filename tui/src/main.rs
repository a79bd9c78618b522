//! Terminal viewer for a remote todo listing.
//!
//! Bootstraps the state container, issues the initial load, and runs
//! the event loop. All state mutation happens here on the main thread:
//! the input thread and the fetch workers only deliver messages over
//! the channel, so a frame always observes a fully settled state.

mod app;
mod fetch;
mod ui;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tuido_core::{TodoClient, TodoStore};

use crate::app::{Action, App, Msg};

#[derive(Parser)]
#[command(version, about = "Terminal viewer for a remote todo listing")]
struct Args {
    /// Base URL of the todo service.
    #[arg(long, default_value = tuido_core::DEFAULT_BASE_URL)]
    endpoint: String,

    /// Append logs to this file. The terminal itself is owned by the
    /// UI, so nothing is ever logged to stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), std::io::Error> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref())?;

    let store = TodoStore::new(TodoClient::new(&args.endpoint));
    let mut app = App::new(store);

    let (tx, rx) = mpsc::channel();
    spawn_input_thread(tx.clone());

    let mut terminal = ratatui::init();
    // The one lifecycle-driven load; `r` re-triggers it later.
    fetch::spawn(app.start_load(), tx.clone());

    let result = run(&mut terminal, &mut app, &tx, &rx);
    ratatui::restore();
    result
}

fn run(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tx: &mpsc::Sender<Msg>,
    rx: &mpsc::Receiver<Msg>,
) -> Result<(), std::io::Error> {
    loop {
        if app.take_dirty() {
            terminal.draw(|frame| ui::render(frame, app))?;
        }
        let Ok(msg) = rx.recv() else {
            break;
        };
        match app.on_msg(msg) {
            Some(Action::Quit) => break,
            Some(Action::Fetch(req)) => fetch::spawn(req, tx.clone()),
            None => {}
        }
    }
    Ok(())
}

/// Forward terminal events to the main loop until it goes away.
fn spawn_input_thread(tx: mpsc::Sender<Msg>) {
    std::thread::spawn(move || loop {
        match crossterm::event::read() {
            Ok(event) => {
                if tx.send(Msg::Input(event)).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

/// Route tracing output to the given file, if any. Without a log file,
/// logging stays uninitialized and all events are discarded.
fn init_tracing(path: Option<&Path>) -> Result<(), std::io::Error> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
