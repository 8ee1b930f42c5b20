use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use super::app::App;

/// How long to block waiting for input before checking for a pending redraw.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Spin up the terminal backend, enter the draw loop, and keep processing input
/// until the user quits. The terminal is restored even when setup or the loop
/// fails.
pub fn run_app(app: &mut App) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut terminal = restore_on_error(open_terminal(), || {
        let _ = disable_raw_mode();
    })?;
    info!("terminal ready");

    let result = event_loop(&mut terminal, app);

    restore_terminal(&mut terminal)?;
    result
}

/// Switch to the alternate screen and wrap stdout in a Ratatui terminal. If
/// the backend cannot be built the alternate screen is left again.
fn open_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    restore_on_error(
        Terminal::new(CrosstermBackend::new(stdout))
            .context("failed to create terminal backend"),
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        },
    )
}

/// Run `undo` when `result` is an error, then hand the result back.
fn restore_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        if app.take_dirty() {
            terminal
                .draw(|frame| app.draw(frame))
                .context("failed to draw frame")?;
        }

        if event::poll(POLL_INTERVAL).context("event polling failed")? {
            match event::read().context("failed to read event")? {
                Event::Key(key_event) => {
                    if app.handle_key(key_event) {
                        return Ok(());
                    }
                }
                Event::Resize(..) => app.invalidate(),
                _ => {}
            }
        }
    }
}

/// Undo everything `run_app` set up, in reverse order. Every step runs even
/// if an earlier one fails; the first failure is returned.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let cursor = terminal.show_cursor().context("failed to show cursor");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen");
    let raw = disable_raw_mode().context("failed to disable raw mode");
    cursor.and(screen).and(raw)?;
    info!("terminal restored");
    Ok(())
}
