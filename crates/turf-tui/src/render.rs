use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};
use turf_core::{connect_modal_visible, Screen};

use crate::ui::components::render_tab_bar;
use crate::ui::notifications::NotificationLevel;
use crate::ui::theme::Palette;
use crate::ui::{views, App};

/// Draw the whole frame from scratch: resolve the screen, render it, then
/// layer the connect modal and the status line on top.
pub(crate) fn render(f: &mut Frame, app: &App) {
    let palette = Palette::for_mode(app.nav.mode());
    let bg = Block::default().style(Style::default().bg(palette.bg));
    f.render_widget(bg, f.area());

    let screen = app.screen();
    match screen {
        Screen::Onboarding => views::render_onboarding(f, app, f.area(), &palette),
        Screen::Room => views::render_room(f, app, f.area(), &palette),
        Screen::DirectMessage => views::render_dm(f, app, f.area(), &palette),
        Screen::PostDetail => views::render_post_detail(f, app, f.area(), &palette),
        Screen::EventList | Screen::AttendeeList | Screen::ChatHub | Screen::CanvasGallery => {
            let chunks = Layout::vertical([
                Constraint::Min(0),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(f.area());

            match screen {
                Screen::EventList => views::render_event_list(f, app, chunks[0], &palette),
                Screen::AttendeeList => views::render_attendee_list(f, app, chunks[0], &palette),
                Screen::ChatHub => views::render_chat_hub(f, app, chunks[0], &palette),
                Screen::CanvasGallery => views::render_canvas_gallery(f, app, chunks[0], &palette),
                _ => {}
            }

            render_tab_bar(f, chunks[1], app.nav.tab(), &palette);
            render_status_line(f, chunks[2], app, &palette, true);
        }
    }

    if connect_modal_visible(&app.nav) {
        views::render_connect_modal(f, app, f.area(), &palette);
    }

    // Overlays still get quit warnings and toasts on their bottom line.
    if !screen.is_base_view() && screen != Screen::Onboarding {
        let bottom = Rect::new(
            f.area().x,
            f.area().y + f.area().height.saturating_sub(1),
            f.area().width,
            1,
        );
        render_status_line(f, bottom, app, &palette, false);
    }
}

fn render_status_line(f: &mut Frame, area: Rect, app: &App, palette: &Palette, show_hints: bool) {
    let line = if app.pending_quit {
        Paragraph::new(" ctrl+c again to leave turf").style(palette.accent_style())
    } else if let Some(toast) = app.current_notification() {
        let style = match toast.level {
            NotificationLevel::Success => palette.accent_style(),
            NotificationLevel::Info => palette.muted_style(),
        };
        Paragraph::new(format!(" {}", toast.message)).style(style)
    } else if show_hints {
        Paragraph::new(" 1/2/3 tabs · m day/night · ctrl+c quit").style(palette.muted_style())
    } else {
        return;
    };
    f.render_widget(line, area);
}
