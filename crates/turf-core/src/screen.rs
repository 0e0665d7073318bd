//! The overlay resolver: a pure, total function from navigation state to the
//! single screen that should be on screen right now.
//!
//! Keeping the output a tagged variant (instead of letting the presentation
//! layer poke at five nullable fields) makes rendering an exhaustive match
//! and makes the mutual-exclusion rules checkable in one place.

use crate::nav::{NavState, Tab};

/// Everything the shell can show full-screen. Exactly one of these is
/// resolved after every intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    EventList,
    AttendeeList,
    ChatHub,
    CanvasGallery,
    Room,
    DirectMessage,
    PostDetail,
}

impl Screen {
    /// Resolve the visible screen. Precedence, first match wins:
    /// onboarding gate, room overlay, DM overlay, post overlay, then the
    /// active tab's base view.
    ///
    /// Total over the whole state space: adversarial states (say, a room and
    /// a post both set, which the intents never produce) still resolve
    /// deterministically in favor of the higher-precedence overlay.
    pub fn resolve(state: &NavState) -> Self {
        if !state.onboarded() {
            return Screen::Onboarding;
        }
        if state.active_room().is_some() {
            return Screen::Room;
        }
        if state.active_dm().is_some() {
            return Screen::DirectMessage;
        }
        if state.selected_post().is_some() {
            return Screen::PostDetail;
        }
        match state.tab() {
            Tab::Events => {
                if state.selected_event().is_some() {
                    Screen::AttendeeList
                } else {
                    Screen::EventList
                }
            }
            Tab::Chat => Screen::ChatHub,
            Tab::Canvas => Screen::CanvasGallery,
        }
    }

    /// True for the three tab base views, where the tab bar is shown.
    pub fn is_base_view(self) -> bool {
        matches!(
            self,
            Screen::EventList | Screen::AttendeeList | Screen::ChatHub | Screen::CanvasGallery
        )
    }
}

/// Whether the connect modal is layered on top of the resolved screen.
/// Orthogonal to [`Screen::resolve`]: the modal is an overlay-on-overlay and
/// requires both halves of the events drill-down.
pub fn connect_modal_visible(state: &NavState) -> bool {
    state.onboarded() && state.selected_event().is_some() && state.selected_attendee().is_some()
}
