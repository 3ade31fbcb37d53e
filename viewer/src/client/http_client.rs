use async_trait::async_trait;

#[allow(unused_imports)]
use log::{debug, error, info, warn};

use crate::client::QueueSource;
use crate::error::ViewerError;
use crate::models::queue::QueueResponse;
use crate::navigator::ServerId;

/// Fetches queue snapshots from the queue service over HTTP.
pub struct HttpQueueClient {
    client: reqwest::Client,
    api_hostname: String,
    server_id: ServerId,
}

impl HttpQueueClient {
    pub fn new(api_hostname: impl Into<String>, server_id: ServerId) -> Self {
        HttpQueueClient {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.into(),
            server_id,
        }
    }

    pub fn server_id(&self) -> &ServerId {
        &self.server_id
    }

    fn queue_url(&self) -> String {
        format!(
            "{}{}",
            self.api_hostname.trim_end_matches('/'),
            self.server_id.api_path()
        )
    }
}

#[async_trait]
impl QueueSource for HttpQueueClient {
    async fn fetch_queue(&self) -> Result<QueueResponse, ViewerError> {
        let url = self.queue_url();
        let response = self.client.get(&url).send().await?;

        // The service answers its own failures with a 500 *and* a JSON body
        // carrying `success: false` plus a message, so don't bail on the
        // status code; the body is the more useful of the two.
        let status = response.status();
        let body = response.text().await?;
        debug!("[?] raw queue response body (HTTP {}): {}", status, body);

        let data: QueueResponse = serde_json::from_str(&body)?;
        Ok(data)
    }
}
