use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::app::ChatRow;
use crate::ui::format::{format_relative_time, truncate_to_width};
use crate::ui::theme::Palette;
use crate::ui::App;

/// Chat hub base view: live rooms on top, DM threads below. One cursor spans
/// both sections (see [`ChatRow`]).
pub fn render_chat_hub(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let rooms = app.catalog.events();
    let dms = app.catalog.dms();

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(rooms.len() as u16 + 1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .horizontal_margin(2)
    .split(area);

    let header = Paragraph::new(Span::styled("CHAT HUB", palette.title_style()));
    f.render_widget(header, chunks[0]);

    f.render_widget(
        Paragraph::new(Span::styled("LIVE ROOMS", palette.accent_style())),
        chunks[1],
    );

    let (room_selected, dm_selected) = match app.chat_row() {
        ChatRow::Room(i) => (Some(i), None),
        ChatRow::Dm(i) => (None, Some(i)),
    };

    let width = area.width.saturating_sub(8) as usize;
    let room_items: Vec<ListItem> = rooms
        .iter()
        .map(|event| {
            ListItem::new(Line::from(vec![
                Span::styled("⦿ ", palette.accent_style()),
                Span::styled(
                    truncate_to_width(&event.title, width.saturating_sub(16)),
                    palette.title_style(),
                ),
                Span::styled(
                    format!("  {} inside", event.attendee_count),
                    palette.muted_style(),
                ),
            ]))
        })
        .collect();
    let room_list = List::new(room_items).highlight_style(palette.selected_style());
    let mut room_state = ListState::default();
    room_state.select(room_selected);
    f.render_stateful_widget(room_list, chunks[2], &mut room_state);

    f.render_widget(
        Paragraph::new(Span::styled("DIRECT MESSAGES", palette.accent_style())),
        chunks[3],
    );

    let dm_items: Vec<ListItem> = dms
        .iter()
        .map(|dm| {
            let mut spans = vec![
                Span::styled(dm.name.clone(), palette.title_style()),
                Span::styled(
                    format!("  {}", truncate_to_width(&dm.preview, width.saturating_sub(24))),
                    palette.muted_style(),
                ),
                Span::styled(
                    format!("  {}", format_relative_time(dm.last_active)),
                    palette.muted_style(),
                ),
            ];
            if dm.unread > 0 {
                spans.push(Span::styled(
                    format!("  {} new", dm.unread),
                    ratatui::style::Style::default().fg(palette.accent_alt),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let dm_list = List::new(dm_items).highlight_style(palette.selected_style());
    let mut dm_state = ListState::default();
    dm_state.select(dm_selected);
    f.render_stateful_widget(dm_list, chunks[4], &mut dm_state);
}
