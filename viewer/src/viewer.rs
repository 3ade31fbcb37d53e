use std::time::Duration;

#[allow(unused_imports)]
use log::{debug, error, info, warn};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::client::QueueSource;
use crate::error::ViewerError;
use crate::models::queue::QueueResponse;
use crate::page::QueuePage;
use crate::render;

/// How often the queue page refreshes itself.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(5000);

/// The polling viewer: fetches the queue on a fixed interval (first fetch
/// immediately) and rewrites the page with whatever state came back.
///
/// Configuration is fixed at construction. `start` spawns the polling task;
/// the returned [`ViewerHandle`] stops it via a cancellation token that is
/// honored at each cycle boundary, never mid-fetch.
pub struct QueueViewer<S: QueueSource> {
    source: S,
    refresh_interval: Duration,
    cancel: CancellationToken,
}

impl<S: QueueSource> QueueViewer<S> {
    pub fn new(source: S) -> Self {
        QueueViewer::with_interval(source, DEFAULT_REFRESH_INTERVAL)
    }

    pub fn with_interval(source: S, refresh_interval: Duration) -> Self {
        QueueViewer {
            source,
            refresh_interval,
            cancel: CancellationToken::new(),
        }
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// One full fetch-and-render cycle. Every outcome renders something; no
    /// outcome is fatal.
    pub async fn refresh_once<P: QueuePage>(&self, page: &mut P) {
        match self.fetch_cycle().await {
            Ok(response) => {
                if let Some(name) = &response.server_name {
                    page.set_heading("Music Queue");
                    page.show_server_name(name);
                }
                if response.queue.is_empty() {
                    page.set_queue_content(&render::render_empty());
                } else {
                    debug!("[+] rendering {} queued songs", response.queue.len());
                    page.set_queue_content(&render::render_queue(&response.queue));
                }
            }
            Err(err) => {
                warn!("[!] refresh cycle failed: {}", err);
                page.set_queue_content(&render::render_error(&err.to_string()));
            }
        }
    }

    // Folds `success: false` bodies into the error path so the render above
    // only has to distinguish ok from not-ok.
    async fn fetch_cycle(&self) -> Result<QueueResponse, ViewerError> {
        let response = self.source.fetch_queue().await?;
        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(ViewerError::Upstream(message));
        }
        Ok(response)
    }

    /// Poll until cancelled. The interval elapses on the wall clock; an
    /// individual cycle failing never stops the loop.
    pub async fn run<P: QueuePage>(&self, page: &mut P) {
        let mut ticker = tokio::time::interval(self.refresh_interval);
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!("[-] viewer cancelled, stopping refresh loop");
                    break;
                }
                _ = ticker.tick() => {
                    if self.cancel.is_cancelled() {
                        break;
                    }
                    debug!("[-] refresh cycle firing");
                    self.refresh_once(page).await;
                }
            }
        }
    }

    /// Spawn the polling task, handing it ownership of the page. Get the
    /// final page state back from [`ViewerHandle::join`].
    pub fn start<P>(self, mut page: P) -> ViewerHandle<P>
    where
        S: 'static,
        P: QueuePage + Send + 'static,
    {
        let cancel = self.cancel.clone();
        let task = tokio::spawn(async move {
            self.run(&mut page).await;
            page
        });
        ViewerHandle { cancel, task }
    }
}

/// Lifecycle handle for a running viewer.
pub struct ViewerHandle<P> {
    cancel: CancellationToken,
    task: JoinHandle<P>,
}

impl<P> ViewerHandle<P> {
    /// Request teardown. The loop exits at the next cycle boundary.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Wait for the polling task to wind down and take the page back.
    pub async fn join(self) -> P {
        self.task.await.expect("viewer task panicked")
    }
}
