use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Palette;
use crate::ui::App;

/// Full-screen detail for a canvas post.
pub fn render_post_detail(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(post) = app.nav.selected_post() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(4),
        Constraint::Length(2),
    ])
    .horizontal_margin(2)
    .split(area);

    let piece = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(post.caption.clone(), palette.title_style())),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.accent_style()),
    );
    f.render_widget(piece, chunks[0]);

    let credit = Paragraph::new(vec![
        Line::from(Span::styled(post.author.clone(), palette.accent_style())),
        Line::from(Span::styled(
            format!("{} · ♥ {}", post.medium, post.likes),
            palette.muted_style(),
        )),
    ]);
    f.render_widget(credit, chunks[1]);

    let hint = Paragraph::new("esc back to the canvas").style(palette.muted_style());
    f.render_widget(hint, chunks[2]);
}
