use std::fs;
use std::path::PathBuf;

#[allow(unused_imports)]
use log::{debug, error, info, warn};

use crate::render;

/// The render target the viewer writes into. Stands in for the queue page's
/// DOM contract: a container for the queue markup, a heading, and a
/// server-name element that stays hidden until revealed.
pub trait QueuePage {
    /// Replace the queue container wholesale. Called exactly once per cycle,
    /// so implementations may treat it as "cycle finished".
    fn set_queue_content(&mut self, html: &str);

    fn set_heading(&mut self, text: &str);

    /// Reveal the server-name element with the given text.
    fn show_server_name(&mut self, name: &str);
}

/// In-memory page; what the tests inspect and what the terminal views wrap.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    pub heading: String,
    /// `None` while the element is still hidden.
    pub server_name: Option<String>,
    pub queue_content: String,
}

impl QueuePage for MemoryPage {
    fn set_queue_content(&mut self, html: &str) {
        self.queue_content = html.to_string();
    }

    fn set_heading(&mut self, text: &str) {
        self.heading = text.to_string();
    }

    fn show_server_name(&mut self, name: &str) {
        self.server_name = Some(name.to_string());
    }
}

/// Page that rewrites a complete HTML document on disk after every cycle, so
/// a browser pointed at the file sees what the live queue page would show.
#[derive(Debug)]
pub struct HtmlFilePage {
    path: PathBuf,
    state: MemoryPage,
}

impl HtmlFilePage {
    pub fn new(path: impl Into<PathBuf>, initial_heading: &str) -> Self {
        HtmlFilePage {
            path: path.into(),
            state: MemoryPage {
                heading: initial_heading.to_string(),
                ..MemoryPage::default()
            },
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write_snapshot(&self) {
        let document = render::render_document(
            &self.state.heading,
            self.state.server_name.as_deref(),
            &self.state.queue_content,
        );
        // A failed write only loses this cycle's snapshot; the next cycle
        // rewrites the whole document anyway.
        if let Err(err) = fs::write(&self.path, document) {
            warn!("[!] failed to write snapshot {}: {}", self.path.display(), err);
        }
    }
}

impl QueuePage for HtmlFilePage {
    fn set_queue_content(&mut self, html: &str) {
        self.state.set_queue_content(html);
        self.write_snapshot();
    }

    fn set_heading(&mut self, text: &str) {
        self.state.set_heading(text);
    }

    fn show_server_name(&mut self, name: &str) {
        self.state.show_server_name(name);
    }
}
