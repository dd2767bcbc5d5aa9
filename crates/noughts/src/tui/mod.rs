//! Terminal UI: two players share one keyboard (and mouse).

mod app;
mod input;
mod ui;

pub use app::{App, Flow};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::GameState;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(first_player = %initial.current_player()))]
pub fn run_tui(initial: GameState) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut terminal = or_restore(setup_terminal, restore_terminal)?;

    let res = run_app(&mut terminal, App::new(initial));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn setup_terminal() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best-effort teardown for when setup fails part way.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        error!(error = ?err, "Failed to leave raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        error!(error = ?err, "Failed to leave alternate screen");
    }
}

/// Runs `setup`, calling `restore` before handing back any error.
fn or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        restore();
    })
}

fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        let area = terminal.draw(|f| ui::draw(f, &app))?.area;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let flow = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                app.handle_click(ui::cell_at(area, column, row));
                Flow::Continue
            }
            _ => Flow::Continue,
        };

        if flow == Flow::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}
