use std::sync::Arc;

use replay_core::model::{Session, SessionId};

use crate::vm::time_fmt::format_card_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCardVm {
    pub id: SessionId,
    pub score_label: String,
    pub started_at_str: String,
    pub duration_label: String,
    pub preview: String,
    pub has_analysis: bool,
}

impl From<&Session> for SessionCardVm {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().clone(),
            score_label: format!("Score: {}/10", session.score()),
            started_at_str: format_card_date(session.start_time()),
            duration_label: format!("Duration: {}s", session.duration_secs()),
            preview: session.journey_preview().to_string(),
            has_analysis: session.has_analysis(),
        }
    }
}

#[must_use]
pub fn map_session_cards(sessions: &[Arc<Session>]) -> Vec<SessionCardVm> {
    sessions
        .iter()
        .map(|session| SessionCardVm::from(session.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use replay_core::model::{Analysis, JourneyStep, SessionDraft};
    use replay_core::time::fixed_now;

    fn session(score: f64, journey: Vec<JourneyStep>, analysis: Option<Analysis>) -> Session {
        let now = fixed_now();
        SessionDraft {
            id: SessionId::new("card-1").unwrap(),
            category: Some("Checkout".to_string()),
            start_time: now,
            end_time: now + Duration::milliseconds(111_900),
            video: "/videos/card-1.mp4".to_string(),
            journey,
            score,
            analysis,
            analysis_timestamp: None,
            session_url: None,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn card_labels_follow_session_fields() {
        let vm = SessionCardVm::from(&session(
            7.5,
            vec![JourneyStep::new("Landed on home", 0.0).unwrap()],
            Some(Analysis::default()),
        ));
        assert_eq!(vm.score_label, "Score: 7.5/10");
        assert_eq!(vm.duration_label, "Duration: 111s");
        assert_eq!(vm.preview, "Landed on home");
        assert!(vm.has_analysis);
    }

    #[test]
    fn integral_score_and_empty_journey() {
        let vm = SessionCardVm::from(&session(9.0, Vec::new(), None));
        assert_eq!(vm.score_label, "Score: 9/10");
        assert_eq!(vm.preview, "No journey steps available");
        assert!(!vm.has_analysis);
    }
}
