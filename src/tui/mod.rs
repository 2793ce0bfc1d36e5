pub mod widgets;

pub mod action;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod renderer;
pub mod runtime;
pub mod snapshot;
pub mod state;

#[cfg(test)]
pub mod testing;


pub use action::{Action, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use crate::config::CellConfig;
use crate::types::MatchDisplayState;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main entry point for TUI mode
pub fn run(
    renderer: Renderer,
    cell: CellConfig,
    time_format: &str,
    initial_state: MatchDisplayState,
    state_path: Option<PathBuf>,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runtime = Runtime::new(AppState::new(initial_state, cell, state_path), time_format);
    runtime.stamp_update();

    let result = event_loop(&mut terminal, &renderer, &mut runtime);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    renderer: &Renderer,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    let size = terminal.size()?;
    runtime.dispatch(Action::Resize {
        cols: size.width,
        rows: size.height,
    });

    loop {
        terminal.draw(|f| {
            let area = f.area();
            renderer.render(runtime.state(), area, f.buffer_mut());
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => key_to_action(key),
            Event::Resize(cols, rows) => Some(Action::Resize { cols, rows }),
            _ => None,
        };

        if let Some(action) = action {
            if runtime.dispatch(action) {
                debug!("ACTION: Quitting application");
                break;
            }
        }
    }

    Ok(())
}
