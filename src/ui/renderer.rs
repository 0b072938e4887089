//! Terminal setup and the main event loop

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

use super::app::{SelectorApp, SelectorStatus};
use super::core::{Action, Component, EventHandler, EventSource, EventType};

/// Owns the terminal modes switched on for the TUI and restores them on drop,
/// including when the loop returns an error or panics.
pub struct TerminalGuard {
    alt_screen: bool,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self { alt_screen: false })
    }

    pub fn enter_alt_screen(&mut self) -> Result<()> {
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.alt_screen = true;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.alt_screen {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), Show);
    }
}

/// Run the selector on the real terminal until it terminates.
pub async fn run_app(mut app: SelectorApp) -> Result<SelectorStatus> {
    let mut guard = TerminalGuard::acquire()?;
    if app.init() == Action::EnterAltScreen {
        guard.enter_alt_screen()?;
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    // Start from the real width instead of the configured default
    let size = terminal.size()?;
    app.handle_events(EventType::Resize(size.width, size.height));

    let mut event_handler = EventHandler::new();
    run_app_loop(&mut terminal, &mut app, &mut event_handler).await?;

    drop(guard);
    info!("Selector finished: {:?}", app.status());
    Ok(app.into_status())
}

/// Draw, wait for one event, dispatch it; repeat until the app terminates.
pub async fn run_app_loop<B: Backend, E: EventSource + Send>(
    terminal: &mut Terminal<B>,
    app: &mut SelectorApp,
    events: &mut E,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            needs_render = false;
        }

        let event = events.next_event().await?;
        if event == EventType::Tick {
            continue;
        }

        if app.handle_events(event) == Action::Quit {
            debug!("Quit requested by the selector");
        }
        needs_render = true;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
