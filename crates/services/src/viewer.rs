use std::sync::Arc;

use replay_core::model::{JourneyStep, Session};
use replay_core::{ActiveStepTracker, StepChange, visible_steps};

/// Playback notifications consumed by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    TimeUpdate,
    Seeked,
    Playing,
}

/// Instruction for the video surface: jump to `time` and optionally resume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekCommand {
    pub time: f64,
    pub resume: bool,
}

/// Per-view state for one open session: the session and its active step.
///
/// Every playback notification re-runs the step mapper; the returned
/// `StepChange` tells the renderer when to scroll.
#[derive(Debug, Clone)]
pub struct ReplayViewer {
    session: Arc<Session>,
    tracker: ActiveStepTracker,
}

impl ReplayViewer {
    #[must_use]
    pub fn new(session: Arc<Session>) -> Self {
        let mut tracker = ActiveStepTracker::new();
        tracker.open(session.id());
        Self { session, tracker }
    }

    /// Show another session. The active step resets when the session changes.
    ///
    /// Returns `true` when the session was switched.
    pub fn open(&mut self, session: Arc<Session>) -> bool {
        let switched = self.tracker.open(session.id());
        if switched {
            tracing::debug!(session_id = %session.id(), "replay viewer switched session");
        }
        self.session = session;
        switched
    }

    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.tracker.active()
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.tracker.is_active(index)
    }

    /// Steps to render: the timeline up to and including the active step.
    #[must_use]
    pub fn visible_steps(&self) -> &[JourneyStep] {
        visible_steps(self.session.journey(), self.tracker.active())
    }

    /// Handle a playback notification at `current_time` seconds.
    pub fn handle(&mut self, event: PlaybackEvent, current_time: f64) -> Option<StepChange> {
        let change = self.tracker.observe(current_time, self.session.journey());
        if let Some(change) = change {
            tracing::trace!(
                ?event,
                current_time,
                previous = ?change.previous,
                current = ?change.current,
                "active step changed"
            );
        }
        change
    }

    /// Seek request for a key-event button: jump and resume playback.
    #[must_use]
    pub fn seek_to(&self, time: f64) -> SeekCommand {
        SeekCommand {
            time: time.max(0.0),
            resume: true,
        }
    }

    /// Key events with their timeline index.
    #[must_use]
    pub fn key_events(&self) -> Vec<(usize, &JourneyStep)> {
        self.session
            .journey()
            .iter()
            .enumerate()
            .filter(|(_, step)| step.is_key_event())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use replay_core::model::{SessionDraft, SessionId};
    use replay_core::time::fixed_now;

    fn session(id: &str, times: &[f64]) -> Arc<Session> {
        let now = fixed_now();
        let journey = times
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let label = if i == 1 {
                    "Error Detected: 500".to_string()
                } else {
                    format!("step {i}")
                };
                JourneyStep::new(label, *t).unwrap()
            })
            .collect();
        Arc::new(
            SessionDraft {
                id: SessionId::new(id).unwrap(),
                category: None,
                start_time: now,
                end_time: now,
                video: format!("/videos/{id}.mp4"),
                journey,
                score: 5.0,
                analysis: None,
                analysis_timestamp: None,
                session_url: None,
            }
            .validate()
            .unwrap(),
        )
    }

    #[test]
    fn time_updates_reveal_steps_progressively() {
        let mut viewer = ReplayViewer::new(session("a", &[0.0, 5.0, 12.0]));
        assert!(viewer.visible_steps().is_empty());

        viewer.handle(PlaybackEvent::TimeUpdate, 7.0);
        assert_eq!(viewer.active_index(), Some(1));
        assert_eq!(viewer.visible_steps().len(), 2);
        assert!(viewer.is_active(1));
    }

    #[test]
    fn seeked_and_playing_resync_immediately() {
        let mut viewer = ReplayViewer::new(session("a", &[0.0, 5.0, 12.0]));
        viewer.handle(PlaybackEvent::TimeUpdate, 1.0);

        let change = viewer.handle(PlaybackEvent::Seeked, 12.5).unwrap();
        assert_eq!(change.current, Some(2));
        assert_eq!(viewer.handle(PlaybackEvent::Playing, 12.6), None);
    }

    #[test]
    fn switching_session_resets_active_step() {
        let mut viewer = ReplayViewer::new(session("a", &[0.0, 5.0, 12.0]));
        viewer.handle(PlaybackEvent::TimeUpdate, 30.0);
        assert_eq!(viewer.active_index(), Some(2));

        assert!(viewer.open(session("b", &[3.0])));
        assert_eq!(viewer.active_index(), None);
        assert!(viewer.visible_steps().is_empty());
    }

    #[test]
    fn seek_resumes_and_clamps() {
        let viewer = ReplayViewer::new(session("a", &[0.0, 5.0]));
        let cmd = viewer.seek_to(-4.0);
        assert_eq!(cmd.time, 0.0);
        assert!(cmd.resume);
    }

    #[test]
    fn key_events_keep_timeline_index() {
        let viewer = ReplayViewer::new(session("a", &[0.0, 5.0, 12.0]));
        let events = viewer.key_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, 1);
    }
}
