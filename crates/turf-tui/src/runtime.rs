use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

/// Main loop: draw, then wait for either a terminal event or a tick.
///
/// All state mutation happens synchronously inside `handle_key`; the tick
/// only expires notifications. Nothing here suspends mid-intent.
pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            // Ctrl+C twice to quit, first press arms it.
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                if app.pending_quit {
                                    app.running = false;
                                } else {
                                    app.pending_quit = true;
                                }
                                continue;
                            }
                            app.pending_quit = false;
                            handle_key(app, key);
                        }
                        // Ratatui re-measures on the next draw.
                        Event::Resize(_, _) => {}
                        _ => {}
                    }
                }
            }
            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }

    Ok(())
}
