use chrono::{DateTime, NaiveDateTime, Utc};
use replay_core::model::{Analysis, JourneyStep, Session, SessionDraft, SessionId};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Top-level shape of a session document: `{"sessions": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionDocument {
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
}

/// Persisted shape of a journey step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyStepRecord {
    pub description: String,
    pub time: f64,
}

/// Persisted shape of a session.
///
/// Field names follow the recorder's JSON output, which mixes camelCase and
/// snake_case keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "startTime")]
    pub start_time: DateTime<Utc>,
    #[serde(rename = "endTime")]
    pub end_time: DateTime<Utc>,
    pub video: String,
    #[serde(default)]
    pub user_journey: Vec<JourneyStepRecord>,
    pub score: f64,
    #[serde(default)]
    pub analysis: Option<Analysis>,
    #[serde(default)]
    pub analysis_timestamp: Option<String>,
    #[serde(default, rename = "qmUrl")]
    pub qm_url: Option<String>,
}

/// Display-only timestamp. Values without an offset are read as UTC.
fn parse_display_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|value| value.and_utc())
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl SessionRecord {
    /// Convert the record into a validated domain `Session`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the id, any step, or the
    /// session fields fail validation.
    pub fn into_session(self) -> Result<Session, StorageError> {
        let id = SessionId::new(self.id).map_err(ser)?;

        let mut journey = Vec::with_capacity(self.user_journey.len());
        for (index, step) in self.user_journey.into_iter().enumerate() {
            let step = JourneyStep::new(step.description, step.time).map_err(|e| {
                StorageError::Serialization(format!("session {id}: step {index}: {e}"))
            })?;
            journey.push(step);
        }

        let analysis_timestamp = non_blank(self.analysis_timestamp).and_then(|raw| {
            let parsed = parse_display_timestamp(&raw);
            if parsed.is_none() {
                tracing::warn!(session_id = %id, value = %raw, "ignoring unreadable analysis_timestamp");
            }
            parsed
        });
        let session_url = non_blank(self.qm_url).and_then(|raw| match Url::parse(&raw) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(session_id = %id, value = %raw, error = %err, "ignoring unreadable qmUrl");
                None
            }
        });

        SessionDraft {
            id: id.clone(),
            category: self.category,
            start_time: self.start_time,
            end_time: self.end_time,
            video: self.video,
            journey,
            score: self.score,
            analysis: self.analysis,
            analysis_timestamp,
            session_url,
        }
        .validate()
        .map_err(|e| StorageError::Serialization(format!("session {id}: {e}")))
    }
}
