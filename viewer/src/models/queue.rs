use serde::{Deserialize, Serialize};

// One queued track, exactly as the queue service hands it to us. Everything
// string-valued in here is user-controlled and must be escaped before it goes
// anywhere near markup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub author: String,
    /// Track length in milliseconds.
    pub duration: u64,
    /// Chat-platform id of whoever enqueued the song.
    pub requester: String,
    /// Resolved display name for the requester, when the service knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_name: Option<String>,
    /// External link for the track (streaming service page), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

// Envelope for GET /api/queue/{server_id}. The service sets `success: false`
// plus `error` on its own failures (and an HTTP 500, which we ignore in favor
// of the body).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueueResponse {
    pub success: bool,
    #[serde(default)]
    pub queue: Vec<Song>,
    #[serde(default)]
    pub server_id: Option<String>,
    #[serde(default)]
    pub server_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
