//! TUI module for interactive size ranking and deletion.

pub mod app;
pub mod delete;
pub mod event;
pub mod signals;
pub mod terminal;
pub mod theme;
pub mod ui;

use std::time::Duration;

pub use app::{Session, View};
pub use delete::{FsRemover, Remover};
pub use event::{update, Event};
pub use theme::Theme;

use crate::config::Config;
use crate::error::Result;

use terminal::Tui;

/// Run the interactive session until the operator quits or a termination
/// signal arrives.
pub fn run(session: Session, config: &Config) -> Result<()> {
    terminal::install_panic_hook();
    if let Err(e) = signals::install_signal_handlers() {
        tracing::warn!(error = %e, "Could not install signal handlers");
    }

    let theme = Theme::new(config.tui.color);
    let units = config.tui.size_units;
    let tick = Duration::from_millis(config.tui.tick_rate_ms);
    let remover = FsRemover::new(config.delete.recursive_folders);

    let mut tui = Tui::enter()?;

    let size = tui.terminal_mut().size()?;
    let mut session = update(
        session,
        Event::Resize {
            width: size.width,
            height: size.height,
        },
        &remover,
    );

    loop {
        tui.terminal_mut()
            .draw(|frame| ui::render(&session, &theme, units, frame))?;

        if session.should_quit {
            tracing::debug!("Quit requested");
            break;
        }
        if signals::terminate_requested() {
            tracing::debug!("Termination signal received");
            break;
        }

        if let Some(event) = event::next_event(&session, tick)? {
            session = update(session, event, &remover);
        }
    }

    Ok(())
}
