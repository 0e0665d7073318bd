//! The navigation state machine.
//!
//! One flat, single-writer state container plus reducer-style intent methods.
//! Every user action maps to exactly one intent; each intent mutates the
//! state synchronously and the presentation layer re-resolves the visible
//! screen afterwards (see [`crate::screen`]).
//!
//! Invariants maintained by the intents:
//! - at most one of {active_room, active_dm, selected_post} is set;
//! - selected_attendee is only set while selected_event is set;
//! - until onboarding completes, no other intent has any effect.

use tracing::debug;

use crate::models::{Attendee, DmSummary, EventData, GalleryPost};

/// Global day/night display mode, independent of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Day,
    Night,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Day => DisplayMode::Night,
            DisplayMode::Night => DisplayMode::Day,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Day => "DAY",
            DisplayMode::Night => "NGT",
        }
    }
}

/// The three primary content tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Events,
    Chat,
    Canvas,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Events, Tab::Chat, Tab::Canvas];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Events => "EVENTS",
            Tab::Chat => "CHAT",
            Tab::Canvas => "CANVAS",
        }
    }
}

/// A one-shot confirmation surfaced to the user after a fire-and-forget
/// action. The core has no transport; emitting the notice is the entire
/// effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    fn signal_sent() -> Self {
        Notice {
            message: "Signal sent! Check the Chat Hub.".to_string(),
        }
    }
}

/// All mutable UI state. Fields are crate-private so the invariants above
/// can only be touched through the intent methods (tests construct
/// adversarial states directly, which is the point of keeping the resolver
/// total).
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub(crate) onboarded: bool,
    pub(crate) mode: DisplayMode,
    pub(crate) tab: Tab,
    pub(crate) selected_event: Option<EventData>,
    pub(crate) selected_attendee: Option<Attendee>,
    pub(crate) active_room: Option<EventData>,
    pub(crate) active_dm: Option<DmSummary>,
    pub(crate) selected_post: Option<GalleryPost>,
}

impl NavState {
    /// Fresh state: events tab, day mode, nothing selected, onboarding
    /// incomplete.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state starting in the given display mode. Construction-time
    /// choice only; user-driven mode changes go through [`Self::toggle_mode`].
    pub fn with_mode(mode: DisplayMode) -> Self {
        NavState {
            mode,
            ..Self::default()
        }
    }

    pub fn onboarded(&self) -> bool {
        self.onboarded
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn selected_event(&self) -> Option<&EventData> {
        self.selected_event.as_ref()
    }

    pub fn selected_attendee(&self) -> Option<&Attendee> {
        self.selected_attendee.as_ref()
    }

    pub fn active_room(&self) -> Option<&EventData> {
        self.active_room.as_ref()
    }

    pub fn active_dm(&self) -> Option<&DmSummary> {
        self.active_dm.as_ref()
    }

    pub fn selected_post(&self) -> Option<&GalleryPost> {
        self.selected_post.as_ref()
    }

    // --- Onboarding gate ---

    /// Complete onboarding. Irreversible; a second call has no effect.
    pub fn complete_onboarding(&mut self) {
        if !self.onboarded {
            debug!("onboarding complete");
            self.onboarded = true;
        }
    }

    /// Completes onboarding iff the trimmed name is non-empty. Whitespace-only
    /// input is silently ignored; this is a UX guard, not a fault.
    pub fn submit_name(&mut self, name: &str) {
        if !name.trim().is_empty() {
            self.complete_onboarding();
        }
    }

    // --- Display mode ---

    pub fn toggle_mode(&mut self) {
        if !self.onboarded {
            return;
        }
        self.mode = self.mode.toggled();
        debug!(mode = self.mode.label(), "display mode toggled");
    }

    // --- Tab selector ---

    /// Activate a tab, then clear all selection state belonging exclusively
    /// to the other tabs. Switching to Events keeps the events drill-down so
    /// returning resumes it; DM and post are re-entered fresh each time.
    ///
    /// A live room is not exclusive to any tab: switching to Canvas leaves
    /// it open and it keeps covering the gallery until closed.
    pub fn select_tab(&mut self, tab: Tab) {
        if !self.onboarded {
            return;
        }
        debug!(tab = tab.label(), "tab selected");
        self.tab = tab;
        match tab {
            Tab::Events => {
                self.active_room = None;
                self.active_dm = None;
                self.selected_post = None;
            }
            Tab::Chat => {
                self.selected_event = None;
                self.selected_attendee = None;
                self.selected_post = None;
            }
            Tab::Canvas => {
                self.selected_event = None;
                self.selected_attendee = None;
                self.active_dm = None;
            }
        }
    }

    // --- Events drill-down ---

    pub fn select_event(&mut self, event: EventData) {
        if !self.onboarded {
            return;
        }
        debug!(event = %event.id, "event selected");
        self.selected_event = Some(event);
    }

    /// Back out of the attendee list to the event list. Also drops any
    /// attendee selection so it cannot dangle without its event.
    pub fn back_to_events(&mut self) {
        if !self.onboarded {
            return;
        }
        self.selected_event = None;
        self.selected_attendee = None;
    }

    /// Open the connect modal for an attendee of the selected event. Without
    /// a selected event the modal has no context, so the intent is ignored.
    pub fn connect(&mut self, attendee: Attendee) {
        if !self.onboarded || self.selected_event.is_none() {
            return;
        }
        debug!(attendee = %attendee.id, "connect modal opened");
        self.selected_attendee = Some(attendee);
    }

    pub fn close_connect(&mut self) {
        if !self.onboarded {
            return;
        }
        self.selected_attendee = None;
    }

    /// Fire-and-forget connect request: dismisses the modal and hands back a
    /// confirmation notice. Returns `None` when no attendee was selected.
    pub fn send_request(&mut self) -> Option<Notice> {
        if !self.onboarded {
            return None;
        }
        self.selected_attendee.take().map(|attendee| {
            debug!(attendee = %attendee.id, "connect request sent");
            Notice::signal_sent()
        })
    }

    // --- Room overlay (reachable from Events and Chat) ---

    /// Promote the selected event into a live room. No-op while nothing is
    /// selected.
    pub fn join_room(&mut self) {
        if !self.onboarded {
            return;
        }
        if let Some(event) = self.selected_event.clone() {
            self.open_room(event);
        }
    }

    pub fn open_room(&mut self, event: EventData) {
        if !self.onboarded {
            return;
        }
        debug!(event = %event.id, "room opened");
        self.active_room = Some(event);
        self.active_dm = None;
        self.selected_post = None;
    }

    /// Clears the room only. The active tab is untouched, so closing a room
    /// returns to whichever tab the user is on, not necessarily Events.
    pub fn close_room(&mut self) {
        if !self.onboarded {
            return;
        }
        self.active_room = None;
    }

    // --- DM overlay (chat tab) ---

    pub fn open_dm(&mut self, dm: DmSummary) {
        if !self.onboarded {
            return;
        }
        debug!(dm = %dm.id, "dm opened");
        self.active_dm = Some(dm);
        self.active_room = None;
        self.selected_post = None;
    }

    pub fn close_dm(&mut self) {
        if !self.onboarded {
            return;
        }
        self.active_dm = None;
    }

    // --- Post overlay (canvas tab) ---

    pub fn select_post(&mut self, post: GalleryPost) {
        if !self.onboarded {
            return;
        }
        debug!(post = %post.id, "post opened");
        self.selected_post = Some(post);
        self.active_room = None;
        self.active_dm = None;
    }

    pub fn close_post(&mut self) {
        if !self.onboarded {
            return;
        }
        self.selected_post = None;
    }

    /// True when at most one full-screen overlay is open. Exposed for tests
    /// and debug assertions.
    pub fn overlays_exclusive(&self) -> bool {
        let open = [
            self.active_room.is_some(),
            self.active_dm.is_some(),
            self.selected_post.is_some(),
        ];
        open.iter().filter(|&&o| o).count() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{connect_modal_visible, Screen};
    use crate::Catalog;

    fn onboarded() -> NavState {
        let mut state = NavState::new();
        state.submit_name("Sam");
        state
    }

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    fn event(catalog: &Catalog, idx: usize) -> EventData {
        catalog.events()[idx].clone()
    }

    fn attendee(catalog: &Catalog, event_id: &str) -> Attendee {
        catalog.attendees_for(event_id)[0].clone()
    }

    #[test]
    fn fresh_state_defaults() {
        let state = NavState::new();
        assert!(!state.onboarded());
        assert_eq!(state.mode(), DisplayMode::Day);
        assert_eq!(state.tab(), Tab::Events);
        assert!(state.selected_event().is_none());
        assert!(state.selected_attendee().is_none());
        assert!(state.active_room().is_none());
        assert!(state.active_dm().is_none());
        assert!(state.selected_post().is_none());
    }

    #[test]
    fn whitespace_name_does_not_pass_the_gate() {
        let mut state = NavState::new();
        state.submit_name("");
        assert_eq!(Screen::resolve(&state), Screen::Onboarding);
        state.submit_name("   \t");
        assert_eq!(Screen::resolve(&state), Screen::Onboarding);
        state.submit_name("Sam");
        assert_eq!(Screen::resolve(&state), Screen::EventList);
    }

    #[test]
    fn onboarding_is_irreversible_and_idempotent() {
        let mut state = onboarded();
        state.complete_onboarding();
        assert!(state.onboarded());
    }

    #[test]
    fn intents_are_inert_before_onboarding() {
        let catalog = catalog();
        let mut state = NavState::new();
        state.toggle_mode();
        state.select_tab(Tab::Canvas);
        state.select_event(event(&catalog, 0));
        state.open_room(event(&catalog, 1));
        state.open_dm(catalog.dms()[0].clone());
        state.select_post(catalog.posts()[0].clone());
        assert!(state.send_request().is_none());

        assert_eq!(state.mode(), DisplayMode::Day);
        assert_eq!(state.tab(), Tab::Events);
        assert!(state.selected_event().is_none());
        assert!(state.active_room().is_none());
        assert!(state.active_dm().is_none());
        assert!(state.selected_post().is_none());
        assert_eq!(Screen::resolve(&state), Screen::Onboarding);
    }

    #[test]
    fn mode_toggle_flips_and_leaves_navigation_alone() {
        let catalog = catalog();
        let mut state = onboarded();
        state.select_event(event(&catalog, 0));
        state.toggle_mode();
        assert_eq!(state.mode(), DisplayMode::Night);
        state.toggle_mode();
        assert_eq!(state.mode(), DisplayMode::Day);
        assert!(state.selected_event().is_some());
    }

    #[test]
    fn scoped_reset_on_tab_switch() {
        let catalog = catalog();
        let mut state = onboarded();
        let ev = event(&catalog, 0);
        state.select_event(ev.clone());
        state.connect(attendee(&catalog, &ev.id));

        state.select_tab(Tab::Chat);
        assert_eq!(state.tab(), Tab::Chat);
        assert!(state.selected_event().is_none());
        assert!(state.selected_attendee().is_none());
    }

    #[test]
    fn switching_to_events_preserves_the_drill_down() {
        let catalog = catalog();
        let mut state = onboarded();
        let ev = event(&catalog, 0);
        state.select_event(ev.clone());

        // A room opened from chat must not survive a switch to events, but
        // the events drill-down must.
        state.open_room(event(&catalog, 1));
        state.select_tab(Tab::Events);
        assert!(state.active_room().is_none());
        assert_eq!(state.selected_event().map(|e| e.id.as_str()), Some(ev.id.as_str()));
        assert_eq!(Screen::resolve(&state), Screen::AttendeeList);
    }

    #[test]
    fn switching_to_canvas_clears_event_and_dm() {
        let catalog = catalog();
        let mut state = onboarded();
        state.select_tab(Tab::Chat);
        state.open_dm(catalog.dms()[0].clone());
        state.select_tab(Tab::Canvas);
        assert!(state.active_dm().is_none());
        assert!(state.selected_event().is_none());
        assert_eq!(Screen::resolve(&state), Screen::CanvasGallery);
    }

    #[test]
    fn overlays_stay_mutually_exclusive_under_arbitrary_intents() {
        let catalog = catalog();
        let mut state = onboarded();
        let ev = event(&catalog, 0);

        state.open_room(ev.clone());
        assert!(state.overlays_exclusive());
        state.open_dm(catalog.dms()[0].clone());
        assert!(state.overlays_exclusive());
        assert!(state.active_room().is_none());
        state.select_post(catalog.posts()[0].clone());
        assert!(state.overlays_exclusive());
        assert!(state.active_dm().is_none());
        state.open_room(ev);
        assert!(state.overlays_exclusive());
        assert!(state.selected_post().is_none());
    }

    #[test]
    fn attendee_requires_event() {
        let catalog = catalog();
        let mut state = onboarded();
        let ev = event(&catalog, 0);
        let at = attendee(&catalog, &ev.id);

        // Connect with no event selected is ignored.
        state.connect(at.clone());
        assert!(state.selected_attendee().is_none());

        state.select_event(ev.clone());
        state.connect(at);
        assert!(state.selected_attendee().is_some());

        // Backing out drops both levels; the attendee never dangles.
        state.back_to_events();
        assert!(state.selected_event().is_none());
        assert!(state.selected_attendee().is_none());
    }

    #[test]
    fn close_handlers_are_idempotent() {
        let mut state = onboarded();
        let before = format!("{state:?}");
        state.close_room();
        state.close_dm();
        state.close_post();
        state.close_connect();
        assert_eq!(format!("{state:?}"), before);
    }

    #[test]
    fn join_room_without_selection_is_a_no_op() {
        let mut state = onboarded();
        state.join_room();
        assert!(state.active_room().is_none());
    }

    #[test]
    fn send_request_emits_one_notice_and_clears_the_attendee() {
        let catalog = catalog();
        let mut state = onboarded();
        let ev = event(&catalog, 0);
        state.select_event(ev.clone());
        state.connect(attendee(&catalog, &ev.id));

        let notice = state.send_request();
        assert!(notice.is_some());
        assert!(state.selected_attendee().is_none());
        // Event selection survives; the user lands back on the squad list.
        assert!(state.selected_event().is_some());

        // Second send with nothing selected emits nothing.
        assert!(state.send_request().is_none());
    }

    #[test]
    fn connect_flow_end_to_end() {
        let catalog = catalog();
        let mut state = NavState::new();
        state.submit_name("A");
        state.select_tab(Tab::Events); // already events, must be a no-op
        let ev = event(&catalog, 0);
        state.select_event(ev.clone());
        state.connect(attendee(&catalog, &ev.id));
        let notice = state.send_request();

        assert_eq!(state.tab(), Tab::Events);
        assert_eq!(state.selected_event().map(|e| e.id.as_str()), Some(ev.id.as_str()));
        assert!(state.selected_attendee().is_none());
        assert_eq!(
            notice,
            Some(Notice {
                message: "Signal sent! Check the Chat Hub.".to_string()
            })
        );
        assert!(state.active_room().is_none());
        assert!(state.active_dm().is_none());
        assert!(state.selected_post().is_none());
        assert_eq!(Screen::resolve(&state), Screen::AttendeeList);
        assert!(!connect_modal_visible(&state));
    }

    #[test]
    fn room_overlay_survives_tab_switch() {
        // Pins the intentionally permissive behavior: a room stays open with
        // the canvas tab active, and closing it lands on the canvas gallery.
        let catalog = catalog();
        let mut state = onboarded();
        state.select_tab(Tab::Chat);
        state.open_room(event(&catalog, 1));
        state.select_tab(Tab::Canvas);

        assert_eq!(state.tab(), Tab::Canvas);
        assert!(state.active_room().is_some());
        assert_eq!(Screen::resolve(&state), Screen::Room);

        state.close_room();
        assert_eq!(state.tab(), Tab::Canvas);
        assert_eq!(Screen::resolve(&state), Screen::CanvasGallery);
    }

    #[test]
    fn closing_a_room_keeps_the_events_drill_down() {
        let catalog = catalog();
        let mut state = onboarded();
        let ev = event(&catalog, 0);
        state.select_event(ev.clone());
        state.join_room();
        assert_eq!(state.active_room().map(|e| e.id.as_str()), Some(ev.id.as_str()));
        assert_eq!(Screen::resolve(&state), Screen::Room);

        state.close_room();
        assert_eq!(Screen::resolve(&state), Screen::AttendeeList);
    }
}
