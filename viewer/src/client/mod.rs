pub mod http_client;
pub mod mock_source;

use async_trait::async_trait;

use crate::error::ViewerError;
use crate::models::queue::QueueResponse;

pub use http_client::HttpQueueClient;
pub use mock_source::MockQueueSource;

/// Where the viewer gets its queue snapshots from. The real implementation
/// talks HTTP; tests script a [`MockQueueSource`] instead.
#[async_trait]
pub trait QueueSource: Send + Sync {
    async fn fetch_queue(&self) -> Result<QueueResponse, ViewerError>;
}
