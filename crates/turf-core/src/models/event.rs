use serde::{Deserialize, Serialize};

/// Category badge shown on an event card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Match,
    Social,
    Workshop,
    Market,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Match => "MATCH",
            EventKind::Social => "SOCIAL",
            EventKind::Workshop => "WORKSHOP",
            EventKind::Market => "MARKET",
        }
    }
}

/// A single agenda entry. Snapshots of this struct travel through the
/// navigation state (selected event, active room); the catalog record itself
/// is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    pub id: String,
    pub title: String,
    pub kind: EventKind,
    /// Display time, e.g. "19:30".
    pub time: String,
    pub location: String,
    /// Confirmed headcount, rendered as "N going".
    pub attendee_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_roundtrips_through_json() {
        let json = r#""workshop""#;
        let kind: EventKind = serde_json::from_str(json).unwrap();
        assert_eq!(kind, EventKind::Workshop);
        assert_eq!(kind.label(), "WORKSHOP");
    }
}
