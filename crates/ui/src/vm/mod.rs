mod analysis_vm;
mod category_vm;
mod session_card_vm;
mod time_fmt;
mod timeline_vm;

pub use analysis_vm::{AnalysisVm, KeyEventVm};
pub use category_vm::{CategoryCardVm, map_category_cards};
pub use session_card_vm::{SessionCardVm, map_session_cards};
pub use time_fmt::{format_card_date, format_datetime, format_seconds};
pub use timeline_vm::{TimelineStepVm, map_timeline, step_dom_id};
