//! Errors produced inside the fetch layer.
//!
//! These never reach view code directly: `fetch*` calls collapse them into
//! absence and `chat` folds them into the reply text.

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// Connection, timeout or body read failure.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with an unexpected status.
    #[error("unexpected status {status}")]
    Status { status: u16, body: String },

    /// The body was not the JSON shape we expected.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// A 200 GraphQL envelope carried an `errors` array.
    #[error("graphql errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
