//! The event loop: draw, read a key, apply the resulting intent, repeat.

use ratatui::crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tasklist_core::{Intent, TaskSync, Transport};

use crate::app::App;
use crate::ui;

/// Run until the user quits. The first frame shows the loading state while
/// the initial fetch is in flight.
pub fn run<T: Transport>(
    terminal: &mut DefaultTerminal,
    sync: &TaskSync<T>,
    app: &mut App,
) -> anyhow::Result<()> {
    perform(terminal, sync, app, Intent::Refresh)?;
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if let Some(intent) = app.handle_key(key) {
            perform(terminal, sync, app, intent)?;
        }
    }
    Ok(())
}

/// Requests are blocking, so the busy frame is drawn before sending.
fn perform<T: Transport>(
    terminal: &mut DefaultTerminal,
    sync: &TaskSync<T>,
    app: &mut App,
    intent: Intent,
) -> anyhow::Result<()> {
    app.view.set_busy(true);
    terminal.draw(|frame| ui::draw(frame, app))?;
    sync.apply(intent, &mut app.view);
    app.view.set_busy(false);
    app.clamp_selection();
    Ok(())
}
