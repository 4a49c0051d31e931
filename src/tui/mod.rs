// Module declarations
pub mod components;
pub mod widgets;

// Core modules
pub mod action;
pub mod component;
pub mod constants;
pub mod keys;
pub mod panel;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod table;
pub mod types;

#[cfg(test)]
pub mod testing;


pub use action::{Action, PanelAction};
pub use component::{Component, Effect, Element};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::Function;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::config::ConfigStore;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Main entry point for TUI mode
///
/// Must be called from within a tokio runtime; the terminal is restored even
/// when the event loop fails.
pub async fn run(config: ConfigStore) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(setup_terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let mut runtime = Runtime::new(AppState::new(config));
    info!("TUI: Started");

    let result = event_loop(&mut terminal, &mut runtime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("TUI: Exited");
    result
}

/// Run `setup`, calling `restore` before returning its error
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T, io::Error>,
    restore: impl FnOnce(),
) -> Result<T, io::Error> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            restore();
            Err(e)
        }
    }
}

fn setup_terminal() -> Result<Term, io::Error> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn event_loop(terminal: &mut Term, runtime: &mut Runtime) -> Result<(), io::Error> {
    let renderer = Renderer::new();

    loop {
        // Process any actions from effects first so their results are drawn
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let element = runtime.build();
            renderer.render(&element, f.area(), f.buffer_mut());
        })?;

        if actions_processed > 0 {
            continue;
        }

        // Poll for keyboard events
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = key_to_action(key, runtime.state()) else {
            continue;
        };
        let should_quit = action.is_quit();
        runtime.dispatch(action);

        if should_quit {
            debug!("ACTION: Quitting application");
            return Ok(());
        }
    }
}
