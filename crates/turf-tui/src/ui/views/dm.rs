use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::format::format_relative_time;
use crate::ui::theme::Palette;
use crate::ui::App;

/// Full-screen DM overlay. Read-only: message delivery is a stub.
pub fn render_dm(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(dm) = app.nav.active_dm() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(2),
    ])
    .horizontal_margin(2)
    .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(dm.name.clone(), palette.title_style())),
        Line::from(Span::styled(
            format!("last active {}", format_relative_time(dm.last_active)),
            palette.muted_style(),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    let thread = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}: ", dm.name), palette.accent_style()),
            Span::styled(dm.preview.clone(), palette.title_style()),
        ]),
    ]);
    f.render_widget(thread, chunks[1]);

    let composer = Paragraph::new(Span::styled(
        "messaging lands soon",
        palette.muted_style(),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted_style()),
    );
    f.render_widget(composer, chunks[2]);

    let hint = Paragraph::new("esc back to the hub").style(palette.muted_style());
    f.render_widget(hint, chunks[3]);
}
