use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::centered_rect;
use crate::ui::theme::Palette;
use crate::ui::App;

/// The one-shot name-entry gate. Until it passes, this is the whole app.
pub fn render_onboarding(f: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let column = centered_rect(area, 44, 16);
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .split(column);

    let title = Paragraph::new(vec![
        Line::from("GROWTH"),
        Line::from("WITHOUT"),
        Line::from("BORDERS"),
    ])
    .style(palette.title_style());
    f.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("CONNECT WITH THE FERTILE GROUND OF BREDA")
        .style(palette.muted_style());
    f.render_widget(subtitle, chunks[1]);

    let label = Paragraph::new("YOUR IDENTITY").style(palette.accent_style());
    f.render_widget(label, chunks[2]);

    let field = if app.name_input.is_empty() {
        Line::from(Span::styled("ENTER NAME...", palette.muted_style()))
    } else {
        Line::from(vec![
            Span::styled(app.name_input.to_uppercase(), palette.title_style()),
            Span::styled("_", palette.accent_style()),
        ])
    };
    f.render_widget(Paragraph::new(field), chunks[3]);

    let action = Paragraph::new("⏎ ENTER TURF").style(palette.accent_style());
    f.render_widget(action, chunks[4]);
}
