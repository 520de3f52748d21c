use serde::{Deserialize, Serialize};

/// A failed fetch, as surfaced to view state.
///
/// Serializable so it can cross component boundaries and sit inside
/// [`crate::FetchState`]. The optional HTTP status is kept for display
/// ("Failed to load dashboard (503)") but carries no retry semantics —
/// nothing in this client retries automatically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
    pub status: Option<u16>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}
