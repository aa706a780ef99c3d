use super::app::NavigatorApp;
use super::event::{Event, EventHandler};
use crate::auth::Authenticator;
use crate::error::{LeadHubError, LeadHubResult};
use crate::logging::{log_debug, log_error, log_info};
use crate::session::SessionGate;
use crate::storage::KeyValueStore;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn terminal_error(e: io::Error) -> LeadHubError {
    LeadHubError::TerminalError(e.to_string())
}

/// Run the full-screen navigator. Returns true if the user signed out from it.
pub async fn run_navigator<S: KeyValueStore, A: Authenticator>(
    gate: &mut SessionGate<S, A>,
) -> LeadHubResult<bool> {
    log_info("Starting navigator");

    // Fail before touching the terminal if nobody is signed in.
    let mut app = NavigatorApp::new(gate)?;

    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;
    log_debug("Terminal initialized");

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    if let Err(e) = &result {
        log_error(&format!("Navigator failed: {}", e));
    }
    log_info("Exiting navigator");

    result.map(|_| app.signed_out)
}

fn event_loop<S: KeyValueStore, A: Authenticator>(
    terminal: &mut CrosstermTerminal,
    app: &mut NavigatorApp<'_, S, A>,
) -> LeadHubResult<()> {
    let events = EventHandler::new(250);

    loop {
        terminal
            .draw(|f| super::ui::draw(f, app))
            .map_err(terminal_error)?;

        match events.recv() {
            Ok(Event::Key(key_event)) => {
                log_debug(&format!("Key pressed: {:?}, page: {}", key_event.code, app.active));
                app.handle_key(key_event.code);
            }
            Ok(Event::Tick) => {}
            Err(e) => return Err(LeadHubError::TerminalError(e.to_string())),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
