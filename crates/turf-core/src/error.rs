use thiserror::Error;

/// Errors surfaced by catalog loading and lookups.
///
/// Navigation intents themselves are total and never fail; the only fallible
/// operations in the core are resolving an id against the static catalogs and
/// parsing the bundled catalog JSON at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown event id: {0}")]
    UnknownEvent(String),

    #[error("unknown attendee id: {0}")]
    UnknownAttendee(String),

    #[error("unknown post id: {0}")]
    UnknownPost(String),

    #[error("unknown dm id: {0}")]
    UnknownDm(String),

    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}
