use crate::model::{JourneyStep, SessionId};
use crate::playback::active_step_index;

/// Transition of the active step, emitted only when the index changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

impl StepChange {
    /// True when playback moved to a later step.
    #[must_use]
    pub fn advanced(&self) -> bool {
        self.current > self.previous
    }

    /// Index of the step that should be scrolled into view, if any.
    #[must_use]
    pub fn scroll_target(&self) -> Option<usize> {
        self.current
    }
}

/// Holds the active step for the session currently on screen.
///
/// Single writer (the playback handlers) and single reader (the renderer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveStepTracker {
    session_id: Option<SessionId>,
    active: Option<usize>,
}

impl ActiveStepTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the tracker to a session.
    ///
    /// Switching to a different session clears the active step before any
    /// playback event of the new video is observed. Returns `true` on a switch.
    pub fn open(&mut self, session_id: &SessionId) -> bool {
        if self.session_id.as_ref() == Some(session_id) {
            return false;
        }
        self.session_id = Some(session_id.clone());
        self.active = None;
        true
    }

    pub fn reset(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Recompute the active step for `current_time`.
    ///
    /// The state is always replaced; a `StepChange` is returned only when the
    /// index differs from the previous one.
    pub fn observe(&mut self, current_time: f64, steps: &[JourneyStep]) -> Option<StepChange> {
        let current = active_step_index(current_time, steps);
        let previous = std::mem::replace(&mut self.active, current);
        (previous != current).then_some(StepChange { previous, current })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(times: &[f64]) -> Vec<JourneyStep> {
        times
            .iter()
            .map(|t| JourneyStep::new("step", *t).unwrap())
            .collect()
    }

    #[test]
    fn starts_with_no_active_step() {
        let tracker = ActiveStepTracker::new();
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn emits_change_only_on_transition() {
        let steps = steps(&[0.0, 5.0, 12.0]);
        let mut tracker = ActiveStepTracker::new();

        let first = tracker.observe(1.0, &steps).expect("moved to step 0");
        assert_eq!(first.previous, None);
        assert_eq!(first.current, Some(0));
        assert!(first.advanced());

        assert_eq!(tracker.observe(2.0, &steps), None);
        assert_eq!(tracker.observe(4.9, &steps), None);

        let second = tracker.observe(6.0, &steps).expect("moved to step 1");
        assert_eq!(second.scroll_target(), Some(1));
    }

    #[test]
    fn seeking_backwards_reports_non_advancing_change() {
        let steps = steps(&[0.0, 5.0, 12.0]);
        let mut tracker = ActiveStepTracker::new();
        tracker.observe(13.0, &steps);

        let back = tracker.observe(0.5, &steps).expect("moved back");
        assert_eq!(back.current, Some(0));
        assert!(!back.advanced());
    }

    #[test]
    fn switching_sessions_resets_before_new_events() {
        let a = SessionId::new("a").unwrap();
        let b = SessionId::new("b").unwrap();
        let steps = steps(&[0.0, 5.0, 12.0]);
        let mut tracker = ActiveStepTracker::new();

        tracker.open(&a);
        tracker.observe(20.0, &steps);
        assert_eq!(tracker.active(), Some(2));

        assert!(tracker.open(&b));
        assert_eq!(tracker.active(), None);
        assert_eq!(tracker.session_id(), Some(&b));
    }

    #[test]
    fn reopening_same_session_keeps_state() {
        let a = SessionId::new("a").unwrap();
        let steps = steps(&[0.0]);
        let mut tracker = ActiveStepTracker::new();
        tracker.open(&a);
        tracker.observe(1.0, &steps);

        assert!(!tracker.open(&a));
        assert_eq!(tracker.active(), Some(0));
    }
}
