use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use crate::{
    config::Config,
    errors::AppResult,
    keys::handle_key,
    model::{Model, RunningState},
    msg::{Message, update::update},
    view::view,
};

const EVENT_POLL_TIMEOUT_MILLIS: u64 = 250;

/// Rows taken by the list borders and the status bar.
const CHROME_HEIGHT: usize = 3;

pub fn run(config_path: Option<PathBuf>) -> AppResult<()> {
    let config = match &config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load(),
    };
    let model = Model::new(&config, config_path)?;

    let terminal = ratatui::init();
    let result = run_loop(terminal, model);
    ratatui::restore();
    result
}

/// Main run loop which polls events (messages), transforms the model,
/// and renders the UI.
fn run_loop(mut terminal: DefaultTerminal, mut model: Model) -> AppResult<()> {
    while model.running_state != RunningState::Done {
        // Update viewport height for scrolling calculations
        let terminal_height = terminal.size()?.height as usize;
        model.ui_model.viewport_height = terminal_height.saturating_sub(CHROME_HEIGHT);

        // Render view
        terminal.draw(|f| view(&model, f))?;

        // Handle event
        let mut current_msg = handle_event()?;

        // Process updates
        while let Some(msg) = current_msg {
            current_msg = update(&mut model, msg);
        }
    }
    Ok(())
}

/// Blocks for [`EVENT_POLL_TIMEOUT_MILLIS`] waiting for a key event.
/// If a key event occurred during this time, return what [`Message`]
/// it should trigger.
fn handle_event() -> AppResult<Option<Message>> {
    if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MILLIS))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == event::KeyEventKind::Press {
                return Ok(handle_key(key));
            }
        }
    }
    Ok(None)
}
