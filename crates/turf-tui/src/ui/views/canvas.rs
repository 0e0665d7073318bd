use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::theme::Palette;
use crate::ui::App;

/// Canvas tab base view: the community wall.
pub fn render_canvas_gallery(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(0)])
        .horizontal_margin(2)
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled("THE CANVAS", palette.title_style())),
        Line::from(""),
        Line::from(Span::styled(
            "WALLS, SCANS & PRINTS FROM THE TURF",
            palette.muted_style(),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = app
        .catalog
        .posts()
        .iter()
        .map(|post| {
            let caption = Line::from(Span::styled(post.caption.clone(), palette.title_style()));
            let credit = Line::from(Span::styled(
                format!("      {} · {} · ♥ {}", post.author, post.medium, post.likes),
                palette.muted_style(),
            ));
            ListItem::new(Text::from(vec![caption, credit, Line::from("")]))
        })
        .collect();

    let list = List::new(items).highlight_style(palette.selected_style());
    let mut state = ListState::default();
    state.select(Some(app.canvas_index));
    f.render_stateful_widget(list, chunks[1], &mut state);
}
