pub mod client;
pub mod error;
pub mod models;
pub mod navigator;
pub mod page;
pub mod render;
pub mod viewer;

pub use crate::error::ViewerError;
pub use crate::navigator::{ServerId, ServerIdError};
pub use crate::viewer::{QueueViewer, ViewerHandle, DEFAULT_REFRESH_INTERVAL};
