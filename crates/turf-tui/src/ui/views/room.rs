use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Palette;
use crate::ui::App;

/// Full-screen live-room overlay. There is no transport behind it; the body
/// is a placeholder until a room backend exists.
pub fn render_room(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(event) = app.nav.active_room() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .horizontal_margin(2)
    .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled("LIVE ROOM", palette.accent_style())),
        Line::from(Span::styled(event.title.clone(), palette.title_style())),
        Line::from(Span::styled(
            format!(
                "{} · {} · {} inside",
                event.time, event.location, event.attendee_count
            ),
            palette.muted_style(),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "You slipped into the room.",
            palette.muted_style(),
        )),
        Line::from(Span::styled(
            "Voices land here once rooms go live.",
            palette.muted_style(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted_style()),
    );
    f.render_widget(body, chunks[1]);

    let hint = Paragraph::new("esc leave the room").style(palette.muted_style());
    f.render_widget(hint, chunks[2]);
}
