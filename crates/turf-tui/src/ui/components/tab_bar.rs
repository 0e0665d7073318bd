use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use turf_core::Tab;

use crate::ui::theme::Palette;

/// Bottom navigation: one cell per tab, active tab highlighted.
pub fn render_tab_bar(f: &mut Frame, area: Rect, active: Tab, palette: &Palette) {
    let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    for (i, tab) in Tab::ALL.iter().enumerate() {
        let label = format!("{} {}", i + 1, tab.label());
        let style = if *tab == active {
            palette.accent_style()
        } else {
            palette.muted_style()
        };
        let cell = Paragraph::new(Line::from(label))
            .centered()
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(palette.border)),
            );
        f.render_widget(cell, cells[i]);
    }
}
