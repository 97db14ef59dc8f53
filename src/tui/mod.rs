//! Terminal User Interface (TUI) for dawdle.
//!
//! A full-screen timer: flip clock, status line, controls and the event log.
//! Built with ratatui and crossterm, driven by the session on the tokio
//! current-thread runtime.

mod app;
mod event;
mod presenter;
mod ui;

pub use app::App;
pub use presenter::TuiPresenter;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::DawdleError;
use crate::timer::{MemoryLog, Scheduler, Session, Wake};

/// Redraw interval while nothing else is happening.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

type TuiSession = Session<TuiPresenter, MemoryLog>;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub async fn run(config: &Config) -> Result<(), DawdleError> {
    enable_raw_mode()
        .map_err(|e| DawdleError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| DawdleError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| DawdleError::Terminal(format!("Failed to create terminal: {e}")))?;

    let (scheduler, wakes) = Scheduler::channel();
    let presenter = TuiPresenter::new(config.timer.style, config.timer.sound);
    let mut session = Session::new(scheduler, presenter, MemoryLog::default())
        .with_restart(config.timer.restart_behavior());
    let mut app = App::new(config.timer.default_minutes());

    info!(style = ?config.timer.style, "tui started");
    let result = run_app(&mut terminal, &mut app, &mut session, wakes).await;

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
async fn run_app<B: Backend + Write>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    session: &mut TuiSession,
    mut wakes: UnboundedReceiver<Wake>,
) -> Result<(), DawdleError> {
    loop {
        terminal
            .draw(|frame| {
                ui::render(
                    frame,
                    &ui::View {
                        app: &*app,
                        mode: session.mode(),
                        presenter: session.presenter(),
                        log: session.log(),
                    },
                );
            })
            .map_err(|e| DawdleError::Terminal(format!("Failed to draw: {e}")))?;

        if session.presenter_mut().take_bell() {
            ring_bell(terminal.backend_mut())?;
        }

        for action in event::handle_events(app, session.controls())? {
            match action {
                event::Action::Quit => app.should_quit = true,
                event::Action::Command(command) => {
                    debug!(?command, "key command");
                    session.apply(command);
                }
            }
        }
        if app.should_quit {
            break;
        }

        tokio::select! {
            Some(wake) = wakes.recv() => session.wake(wake),
            () = tokio::time::sleep(FRAME_INTERVAL) => {}
        }
    }

    Ok(())
}

/// Write the terminal bell straight to the output.
fn ring_bell<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"\x07")?;
    Write::flush(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_bell_writes_bel() {
        let mut out = Vec::new();
        ring_bell(&mut out).unwrap();
        assert_eq!(out, b"\x07");
    }
}
