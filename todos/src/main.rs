//! `todos`: a terminal to-do list.
//!
//! Type a task and press Enter to add it; Tab through the list to check
//! tasks off or remove them. Configuration via CLI flags, environment
//! variables, or config file (`~/.config/todos/config.toml`).
//!
//! ```bash
//! cargo run --bin todos
//!
//! # Custom heading, debug logging to a chosen file
//! cargo run --bin todos -- --heading Groceries \
//!     --log-level debug --log-file /tmp/todos-debug.log
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use todos::config::{CliArgs, ClientConfig};
use todos::ui::{self, TerminalSurface};
use todos_core::Store;

type TerminalStore = Store<TerminalSurface<CrosstermBackend<io::Stdout>>>;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args / env > config file > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::from_cli(&cli)
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("todos starting");

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let surface = TerminalSurface::new(terminal, config.to_view_options())
        .with_status_bar(config.show_status_bar);
    let mut store = Store::new(surface);

    // Run the app.
    let result = run_app(&mut store);

    // Restore terminal.
    disable_raw_mode()?;
    let terminal = store.view_mut().terminal_mut();
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        tasks = store.read().tasks.len(),
        revisions = store.revision(),
        "todos exiting"
    );
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("todos.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
///
/// Blocks on terminal events; each key press is fully handled (every
/// intent dispatched and rendered) before the next event is read.
fn run_app(store: &mut TerminalStore) -> io::Result<()> {
    // Initial frame.
    store.render()?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                ui::handle_key(store, key)?;
            }
            // ratatui resizes its buffers on the next draw.
            Event::Resize(..) => store.render()?,
            _ => {}
        }

        if store.view().app().should_quit {
            return Ok(());
        }
    }
}
