use turf_core::{Catalog, DisplayMode, NavState, Screen};

use crate::ui::notifications::{Notification, NotificationQueue};

/// What the chat hub cursor points at: rooms are listed first, DM threads
/// after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRow {
    Room(usize),
    Dm(usize),
}

/// Presentation-side state: the navigation engine plus everything that is
/// only about rendering (list cursors, the onboarding input buffer, toasts).
/// Cursors are deliberately not part of [`NavState`]; where the highlight
/// sits is not navigation.
pub struct App {
    pub running: bool,
    /// Armed by the first Ctrl+C, cleared by any other key.
    pub pending_quit: bool,
    pub nav: NavState,
    pub catalog: Catalog,
    /// Buffer behind the onboarding name field.
    pub name_input: String,
    pub event_index: usize,
    pub attendee_index: usize,
    pub chat_index: usize,
    pub canvas_index: usize,
    notifications: NotificationQueue,
}

impl App {
    pub fn new(catalog: Catalog, mode: DisplayMode) -> Self {
        App {
            running: true,
            pending_quit: false,
            nav: NavState::with_mode(mode),
            catalog,
            name_input: String::new(),
            event_index: 0,
            attendee_index: 0,
            chat_index: 0,
            canvas_index: 0,
            notifications: NotificationQueue::default(),
        }
    }

    /// The screen the resolver picks for the current state.
    pub fn screen(&self) -> Screen {
        Screen::resolve(&self.nav)
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Timer-driven upkeep; called from the runtime tick.
    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    pub fn chat_row_count(&self) -> usize {
        self.catalog.events().len() + self.catalog.dms().len()
    }

    pub fn chat_row(&self) -> ChatRow {
        let rooms = self.catalog.events().len();
        if self.chat_index < rooms {
            ChatRow::Room(self.chat_index)
        } else {
            ChatRow::Dm(self.chat_index - rooms)
        }
    }
}

/// Move a list cursor one step, clamped to the list bounds. Empty lists pin
/// the cursor at zero.
pub(crate) fn step_cursor(current: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if down {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    }
}
