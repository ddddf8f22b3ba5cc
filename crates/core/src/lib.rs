#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod playback;
pub mod time;
pub mod tracker;

pub use error::Error;
pub use playback::{active_step_index, signed_index, visible_steps};
pub use tracker::{ActiveStepTracker, StepChange};
