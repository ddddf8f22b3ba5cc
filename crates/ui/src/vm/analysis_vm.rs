use replay_core::model::Session;

use crate::vm::time_fmt::{format_datetime, format_seconds};

#[derive(Clone, Debug, PartialEq)]
pub struct KeyEventVm {
    pub description: String,
    pub time: f64,
    pub time_label: String,
}

/// Right-pane summary of a session: link, recommendations and key events.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisVm {
    pub session_url: Option<String>,
    pub analyzed_at: Option<String>,
    pub has_analysis: bool,
    pub recommendations: Vec<String>,
    pub key_events: Vec<KeyEventVm>,
}

impl From<&Session> for AnalysisVm {
    fn from(session: &Session) -> Self {
        Self {
            session_url: session.session_url().map(ToString::to_string),
            analyzed_at: session.analysis_timestamp().map(format_datetime),
            has_analysis: session.has_analysis(),
            recommendations: session.recommendations().to_vec(),
            key_events: session
                .key_events()
                .map(|step| KeyEventVm {
                    description: step.description().to_string(),
                    time: step.time(),
                    time_label: format_seconds(step.time()),
                })
                .collect(),
        }
    }
}
