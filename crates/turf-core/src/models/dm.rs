use serde::{Deserialize, Serialize};

/// Summary row for a direct-message thread in the chat hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmSummary {
    pub id: String,
    pub name: String,
    /// Last message, truncated by the presentation layer.
    pub preview: String,
    /// Unix seconds of the last message.
    pub last_active: i64,
    pub unread: u32,
}
