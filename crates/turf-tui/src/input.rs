use crossterm::event::{KeyCode, KeyEvent};
use turf_core::{connect_modal_visible, Screen, Tab};

use crate::ui::app::{step_cursor, ChatRow};
use crate::ui::notifications::Notification;
use crate::ui::App;

/// Map a key press to exactly one navigation intent (or a cursor move).
/// The connect modal takes keys first, like any modal; after that the
/// resolved screen decides which handler runs.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    if connect_modal_visible(&app.nav) {
        handle_connect_modal_key(app, key);
        return;
    }

    match app.screen() {
        Screen::Onboarding => handle_onboarding_key(app, key),
        Screen::Room => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                app.nav.close_room();
            }
        }
        Screen::DirectMessage => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                app.nav.close_dm();
            }
        }
        Screen::PostDetail => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                app.nav.close_post();
            }
        }
        Screen::EventList => {
            if handle_chrome_key(app, key) {
                return;
            }
            handle_event_list_key(app, key);
        }
        Screen::AttendeeList => {
            if handle_chrome_key(app, key) {
                return;
            }
            handle_attendee_list_key(app, key);
        }
        Screen::ChatHub => {
            if handle_chrome_key(app, key) {
                return;
            }
            handle_chat_hub_key(app, key);
        }
        Screen::CanvasGallery => {
            if handle_chrome_key(app, key) {
                return;
            }
            handle_canvas_key(app, key);
        }
    }
}

/// Keys available on every base view: tab switching and the mode toggle.
fn handle_chrome_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('1') => app.nav.select_tab(Tab::Events),
        KeyCode::Char('2') => app.nav.select_tab(Tab::Chat),
        KeyCode::Char('3') => app.nav.select_tab(Tab::Canvas),
        KeyCode::Char('m') => app.nav.toggle_mode(),
        _ => return false,
    }
    true
}

fn handle_connect_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if let Some(notice) = app.nav.send_request() {
                app.notify(Notification::success(notice.message));
            }
        }
        KeyCode::Esc => app.nav.close_connect(),
        _ => {}
    }
}

fn handle_onboarding_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => app.name_input.push(c),
        KeyCode::Backspace => {
            app.name_input.pop();
        }
        KeyCode::Enter => {
            let name = app.name_input.trim().to_string();
            app.nav.submit_name(&name);
            if app.nav.onboarded() && !name.is_empty() {
                app.notify(Notification::info(format!("Welcome to the turf, {name}.")));
            }
        }
        _ => {}
    }
}

fn handle_event_list_key(app: &mut App, key: KeyEvent) {
    let len = app.catalog.events().len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.event_index = step_cursor(app.event_index, len, false);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.event_index = step_cursor(app.event_index, len, true);
        }
        KeyCode::Enter => {
            if let Some(event) = app.catalog.events().get(app.event_index).cloned() {
                app.nav.select_event(event);
                app.attendee_index = 0;
            }
        }
        _ => {}
    }
}

fn handle_attendee_list_key(app: &mut App, key: KeyEvent) {
    let Some(event_id) = app.nav.selected_event().map(|e| e.id.clone()) else {
        return;
    };
    let len = app.catalog.attendees_for(&event_id).len();

    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            app.nav.back_to_events();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.attendee_index = step_cursor(app.attendee_index, len, false);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.attendee_index = step_cursor(app.attendee_index, len, true);
        }
        KeyCode::Enter => {
            if let Some(attendee) = app
                .catalog
                .attendees_for(&event_id)
                .get(app.attendee_index)
                .cloned()
            {
                app.nav.connect(attendee);
            }
        }
        KeyCode::Char('r') => app.nav.join_room(),
        _ => {}
    }
}

fn handle_chat_hub_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.chat_index = step_cursor(app.chat_index, app.chat_row_count(), false);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.chat_index = step_cursor(app.chat_index, app.chat_row_count(), true);
        }
        KeyCode::Enter => match app.chat_row() {
            ChatRow::Room(i) => {
                if let Some(event) = app.catalog.events().get(i).cloned() {
                    app.nav.open_room(event);
                }
            }
            ChatRow::Dm(i) => {
                if let Some(dm) = app.catalog.dms().get(i).cloned() {
                    app.nav.open_dm(dm);
                }
            }
        },
        _ => {}
    }
}

fn handle_canvas_key(app: &mut App, key: KeyEvent) {
    let len = app.catalog.posts().len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.canvas_index = step_cursor(app.canvas_index, len, false);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.canvas_index = step_cursor(app.canvas_index, len, true);
        }
        KeyCode::Enter => {
            if let Some(post) = app.catalog.posts().get(app.canvas_index).cloned() {
                app.nav.select_post(post);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use turf_core::{Catalog, DisplayMode};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Catalog::bundled().unwrap(), DisplayMode::Day)
    }

    fn onboarded_app() -> App {
        let mut app = app();
        app.nav.submit_name("Sam");
        app
    }

    #[test]
    fn typing_and_enter_passes_the_gate() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Onboarding);

        for c in "Sam".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::EventList);
    }

    #[test]
    fn number_keys_switch_tabs() {
        let mut app = onboarded_app();
        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.screen(), Screen::ChatHub);
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.screen(), Screen::CanvasGallery);
        handle_key(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.screen(), Screen::EventList);
    }

    #[test]
    fn drill_into_event_and_back() {
        let mut app = onboarded_app();
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::AttendeeList);

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::EventList);
        // Cursor on the event list is untouched by the round trip.
        assert_eq!(app.event_index, 1);
    }

    #[test]
    fn modal_enter_sends_and_toasts() {
        let mut app = onboarded_app();
        handle_key(&mut app, key(KeyCode::Enter)); // drill into first event
        handle_key(&mut app, key(KeyCode::Enter)); // connect to first attendee
        assert!(connect_modal_visible(&app.nav));

        handle_key(&mut app, key(KeyCode::Enter)); // send
        assert!(!connect_modal_visible(&app.nav));
        assert!(app.current_notification().is_some());
        assert_eq!(app.screen(), Screen::AttendeeList);
    }

    #[test]
    fn chat_hub_opens_rooms_and_dms() {
        let mut app = onboarded_app();
        let rooms = app.catalog.events().len();
        handle_key(&mut app, key(KeyCode::Char('2')));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Room);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::ChatHub);

        app.chat_index = rooms; // first DM row
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::DirectMessage);
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert_eq!(app.screen(), Screen::ChatHub);
    }

    #[test]
    fn room_opened_from_events_closes_back_to_attendee_list() {
        let mut app = onboarded_app();
        handle_key(&mut app, key(KeyCode::Enter)); // drill in
        handle_key(&mut app, key(KeyCode::Char('r'))); // join room
        assert_eq!(app.screen(), Screen::Room);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::AttendeeList);
    }

    #[test]
    fn mode_toggle_only_lives_on_base_views() {
        let mut app = onboarded_app();
        handle_key(&mut app, key(KeyCode::Char('m')));
        assert_eq!(app.nav.mode(), DisplayMode::Night);

        handle_key(&mut app, key(KeyCode::Char('2')));
        handle_key(&mut app, key(KeyCode::Enter)); // open a room
        handle_key(&mut app, key(KeyCode::Char('m'))); // ignored inside overlay
        assert_eq!(app.nav.mode(), DisplayMode::Night);
    }
}
