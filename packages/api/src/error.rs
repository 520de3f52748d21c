use store::FetchError;

/// Everything that can go wrong talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, aborted).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status. The message is the
    /// backend's own, when it sent one.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A 401. The session has already been cleared and the unauthorized
    /// handler invoked by the time this surfaces.
    #[error("session expired")]
    Unauthorized,

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }
}

impl From<ApiError> for FetchError {
    fn from(err: ApiError) -> Self {
        match err.status() {
            Some(status) => FetchError::with_status(err.to_string(), status),
            None => FetchError::new(err.to_string()),
        }
    }
}
