#![forbid(unsafe_code)]

pub mod app_services;
pub mod canvas;
pub mod catalog_service;
pub mod error;
pub mod viewer;

pub use app_services::AppServices;
pub use canvas::{
    CanvasApi, CanvasConfig, CanvasCreated, CanvasRequest, CanvasService, ChatMessage,
    HttpCanvasApi, ModelChoice,
};
pub use catalog_service::{CategoryGroup, DeleteOutcome, SessionCatalogService};
pub use error::{CanvasError, CatalogError};
pub use viewer::{PlaybackEvent, ReplayViewer, SeekCommand};
