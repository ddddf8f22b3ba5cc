mod analysis;
mod category;
mod ids;
mod journey;
mod session;

pub use analysis::{Analysis, AnalysisResult};
pub use category::{Category, CategoryError};
pub use ids::{CanvasId, ParseIdError, SessionId};
pub use journey::{JourneyError, JourneyStep, KEY_EVENT_MARKERS};
pub use session::{Session, SessionDraft, SessionError};
