//! Chat-to-canvas creation through an external canvas service.

mod api;
mod model;
mod prompt;
mod service;

pub use api::{CanvasApi, HttpCanvasApi};
pub use model::{CanvasCreated, CanvasRequest, ChatMessage, ModelChoice};
pub use prompt::DEFAULT_SYSTEM_PROMPT;
pub use service::{CanvasConfig, CanvasService};
