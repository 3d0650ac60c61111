//! Terminal front-end.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for_key, action_for_mouse};

use crate::logging;
use crate::settings::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
pub fn run(settings: &Settings) -> Result<()> {
    logging::init_file(settings.logging())?;

    info!("Starting Jogo da Velha TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(settings);
    let res = run_app(&mut terminal, app);

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
    info!("TUI exited");

    res
}

/// Event loop: redraw when something changed, then wait for input.
#[instrument(skip_all)]
fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        if app.take_dirty() {
            terminal.draw(|frame| ui::draw(frame, &mut app))?;
        }

        if event::poll(Duration::from_millis(250))? {
            let action = match event::read()? {
                Event::Key(key) => action_for_key(key),
                Event::Mouse(mouse) => action_for_mouse(mouse, |col, row| app.cell_at(col, row)),
                Event::Resize(..) => {
                    app.mark_dirty();
                    None
                }
                _ => None,
            };

            if let Some(action) = action {
                app.handle(action);
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
