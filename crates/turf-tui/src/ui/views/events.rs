use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::format::truncate_to_width;
use crate::ui::theme::Palette;
use crate::ui::App;

/// The agenda: base view of the events tab.
pub fn render_event_list(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)])
        .horizontal_margin(2)
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled("TURF AGENDA", palette.title_style())),
        Line::from(""),
        Line::from(Span::styled(
            "SELECT AN EVENT TO FIND YOUR SQUAD",
            palette.muted_style(),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    let width = chunks[1].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .catalog
        .events()
        .iter()
        .map(|event| {
            let title = Line::from(vec![
                Span::styled(format!("[{}] ", event.kind.label()), palette.accent_style()),
                Span::styled(
                    truncate_to_width(&event.title, width.saturating_sub(12)),
                    palette.title_style(),
                ),
                Span::styled(format!("  {}", event.time), palette.muted_style()),
            ]);
            let detail = Line::from(Span::styled(
                format!(
                    "      {} · {} going",
                    event.location, event.attendee_count
                ),
                palette.muted_style(),
            ));
            ListItem::new(Text::from(vec![title, detail, Line::from("")]))
        })
        .collect();

    let list = List::new(items).highlight_style(palette.selected_style());
    let mut state = ListState::default();
    state.select(Some(app.event_index));
    f.render_stateful_widget(list, chunks[1], &mut state);
}

/// Squad list for the selected event. Renders nothing without a selection;
/// the resolver never routes here in that case.
pub fn render_attendee_list(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(event) = app.nav.selected_event() else {
        return;
    };

    let chunks = Layout::vertical([Constraint::Length(5), Constraint::Min(0)])
        .horizontal_margin(2)
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(event.title.clone(), palette.title_style())),
        Line::from(Span::styled(
            format!(
                "{} · {} · {} · {} going",
                event.kind.label(),
                event.time,
                event.location,
                event.attendee_count
            ),
            palette.muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "⏎ connect · r join the live room · esc back",
            palette.muted_style(),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    let squad = app.catalog.attendees_for(&event.id);
    if squad.is_empty() {
        let empty = Paragraph::new("Nobody on the list yet. Be the first, join the room with r.")
            .style(palette.muted_style());
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = squad
        .iter()
        .map(|attendee| {
            let name = Line::from(vec![
                Span::styled(attendee.name.clone(), palette.title_style()),
                Span::styled(format!(" · {}", attendee.role), palette.accent_style()),
            ]);
            let vibe = Line::from(Span::styled(
                format!("      {}", attendee.vibe),
                palette.muted_style(),
            ));
            ListItem::new(Text::from(vec![name, vibe, Line::from("")]))
        })
        .collect();

    let list = List::new(items).highlight_style(palette.selected_style());
    let mut state = ListState::default();
    state.select(Some(app.attendee_index));
    f.render_stateful_widget(list, chunks[1], &mut state);
}
