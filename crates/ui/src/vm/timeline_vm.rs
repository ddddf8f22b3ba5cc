use replay_core::model::JourneyStep;
use replay_core::visible_steps;

use crate::vm::time_fmt::format_seconds;

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineStepVm {
    pub index: usize,
    pub dom_id: String,
    pub description: String,
    pub appears_at: String,
    pub is_active: bool,
    pub is_key_event: bool,
}

/// DOM id of a rendered timeline entry; the scroll script targets it.
#[must_use]
pub fn step_dom_id(index: usize) -> String {
    format!("journey-step-{index}")
}

/// Timeline entries up to and including the active step.
#[must_use]
pub fn map_timeline(steps: &[JourneyStep], active: Option<usize>) -> Vec<TimelineStepVm> {
    visible_steps(steps, active)
        .iter()
        .enumerate()
        .map(|(index, step)| TimelineStepVm {
            index,
            dom_id: step_dom_id(index),
            description: step.description().to_string(),
            appears_at: format!("Appears at: {}", format_seconds(step.time())),
            is_active: active == Some(index),
            is_key_event: step.is_key_event(),
        })
        .collect()
}
