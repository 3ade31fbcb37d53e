use thiserror::Error;

/// Everything that can go wrong during one refresh cycle. None of these are
/// fatal to the viewer; the message gets rendered inline and the next cycle
/// runs as scheduled.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The queue service answered with `success: false` and its own message.
    #[error("{0}")]
    Upstream(String),

    /// Request never completed (DNS, refused connection, dropped socket...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body came back but was not a QueueResponse.
    #[error("malformed queue response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
