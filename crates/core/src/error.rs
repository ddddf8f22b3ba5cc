use thiserror::Error;

use crate::model::{CategoryError, JourneyError, SessionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Journey(#[from] JourneyError),
    #[error(transparent)]
    Category(#[from] CategoryError),
}
