//! Sourcedex application runtime (terminal lifecycle and event loop).
//!
//! Owns the terminal setup/teardown, the single background feed-load task,
//! and the `select!` loop that marries terminal input with the load result.
//! After load, every mutation and recomputation runs synchronously on this
//! loop before the next event is taken — there are no partial-result races
//! to guard against.

use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::args::Args;
use crate::feed::{self, FeedOutcome};
use crate::state::{AppState, LoadState};
use crate::ui::ui;

/// Error alias for the runtime.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Enter raw mode and the alternate screen.
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Leave the alternate screen and restore the terminal.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// What: Run the Sourcedex TUI until the user quits.
///
/// Inputs:
/// - `args`: Parsed command-line arguments (feed location).
///
/// Output:
/// - `Ok(())` on normal shutdown; terminal state is restored either way.
///
/// Details:
/// - Spawns one load task for the feed; its outcome flips the app into the
///   loaded state or one of the terminal display states.
/// - A dedicated thread polls crossterm and forwards events over a channel
///   so the async loop can `select!` across both.
pub async fn run(args: Args) -> Result<()> {
    setup_terminal()?;
    let res = run_loop(args).await;
    restore_terminal()?;
    res
}

/// The draw/select loop, split out so terminal teardown always runs.
async fn run_loop(args: Args) -> Result<()> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let mut app = AppState::default();

    let (load_tx, mut load_rx) = mpsc::channel::<Result<FeedOutcome>>(1);
    let location = args.feed.clone();
    tokio::spawn(async move {
        let outcome = feed::load_feed(&location).await;
        let _ = load_tx.send(outcome).await;
    });

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
                && event_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app) {
                    break;
                }
            }
            Some(outcome) = load_rx.recv() => {
                apply_load_outcome(&mut app, outcome, &args.feed);
            }
            else => break,
        }
    }

    Ok(())
}

/// Translate the load task's result into the app's load state.
fn apply_load_outcome(app: &mut AppState, outcome: Result<FeedOutcome>, location: &str) {
    match outcome {
        Ok(FeedOutcome::Loaded(records)) => {
            tracing::info!(count = records.len(), feed = %location, "sources loaded");
            app.set_catalog(records);
        }
        Ok(FeedOutcome::Empty) => {
            tracing::warn!(feed = %location, "feed contained no sources");
            app.load = LoadState::NoSources;
        }
        Err(e) => {
            tracing::error!(error = %e, feed = %location, "failed to load sources");
            app.load = LoadState::Error;
        }
    }
}
