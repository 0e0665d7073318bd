use serde::{Deserialize, Serialize};

/// Someone on an event's squad list. The connect modal shows `role` and
/// `vibe` so two strangers have an opening line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,
    pub name: String,
    /// What they do at this event, e.g. "Keeper" or "Selector".
    pub role: String,
    /// One-line self description.
    pub vibe: String,
}
