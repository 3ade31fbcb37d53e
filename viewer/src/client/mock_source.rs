use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::QueueSource;
use crate::error::ViewerError;
use crate::models::queue::QueueResponse;

// One scripted fetch outcome. Raw bodies go through the real serde parse, so
// a test can feed exact JSON (including garbage that should fail to parse).
#[derive(Clone)]
enum ScriptedFetch {
    Response(QueueResponse),
    RawBody(String),
}

/// Scripted stand-in for the HTTP client. Responses are consumed in order;
/// the last one sticks and repeats forever, which is what an unattended
/// polling loop would see from a quiet service.
#[derive(Clone, Default)]
pub struct MockQueueSource {
    script: Arc<Mutex<VecDeque<ScriptedFetch>>>,
    fetch_count: Arc<AtomicUsize>,
}

impl MockQueueSource {
    pub fn new() -> Self {
        MockQueueSource::default()
    }

    pub fn push_response(&self, response: QueueResponse) {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedFetch::Response(response));
    }

    pub fn push_raw_body(&self, body: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedFetch::RawBody(body.to_string()));
    }

    /// How many times the viewer has fetched so far.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueueSource for MockQueueSource {
    async fn fetch_queue(&self) -> Result<QueueResponse, ViewerError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        let next = {
            let mut script = self.script.lock().unwrap();
            if script.len() > 1 {
                script.pop_front()
            } else {
                script.front().cloned()
            }
        };

        match next {
            Some(ScriptedFetch::Response(response)) => Ok(response),
            Some(ScriptedFetch::RawBody(body)) => match serde_json::from_str(&body) {
                Ok(response) => Ok(response),
                Err(err) => Err(ViewerError::MalformedResponse(err)),
            },
            // Unscripted mock: behave like a healthy service with nothing queued.
            None => Ok(QueueResponse {
                success: true,
                ..QueueResponse::default()
            }),
        }
    }
}
