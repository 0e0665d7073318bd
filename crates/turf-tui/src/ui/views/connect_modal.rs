use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::ui::components::centered_rect;
use crate::ui::theme::Palette;
use crate::ui::App;

/// The connect modal, layered over whatever the resolver picked. Requires
/// both halves of the events drill-down; with either missing it draws
/// nothing, mirroring the resolver's visibility rule.
pub fn render_connect_modal(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let (Some(event), Some(attendee)) = (app.nav.selected_event(), app.nav.selected_attendee())
    else {
        return;
    };

    let popup = centered_rect(area, 46, 10);
    f.render_widget(Clear, popup);

    let body = Paragraph::new(vec![
        Line::from(Span::styled(attendee.name.clone(), palette.title_style())),
        Line::from(Span::styled(
            format!("{} at {}", attendee.role, event.title),
            palette.accent_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("\"{}\"", attendee.vibe), palette.muted_style())),
        Line::from(""),
        Line::from(Span::styled(
            "⏎ send signal · esc close",
            palette.muted_style(),
        )),
    ])
    .block(
        Block::default()
            .title(" CONNECT ")
            .borders(Borders::ALL)
            .border_style(palette.accent_style())
            .padding(Padding::horizontal(2))
            .style(ratatui::style::Style::default().bg(palette.bg_card)),
    );
    f.render_widget(body, popup);
}
