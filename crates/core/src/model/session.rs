use chrono::{DateTime, Utc};
use thiserror::Error;
use url::Url;

use crate::model::{Analysis, Category, JourneyStep, SessionId};
use crate::time::whole_seconds_between;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("end_time is before start_time")]
    InvalidTimeRange,

    #[error("score must be a finite number, got {0}")]
    InvalidScore(f64),

    #[error("video reference cannot be empty")]
    MissingVideo,
}

/// Unvalidated session fields, as read from a data source.
#[derive(Debug, Clone)]
pub struct SessionDraft {
    pub id: SessionId,
    pub category: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub video: String,
    pub journey: Vec<JourneyStep>,
    pub score: f64,
    pub analysis: Option<Analysis>,
    pub analysis_timestamp: Option<DateTime<Utc>>,
    pub session_url: Option<Url>,
}

impl SessionDraft {
    /// Validate the draft into an immutable `Session`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTimeRange` if the session ends before it starts.
    /// Returns `SessionError::InvalidScore` for NaN or infinite scores.
    /// Returns `SessionError::MissingVideo` if the video reference is blank.
    pub fn validate(self) -> Result<Session, SessionError> {
        if self.end_time < self.start_time {
            return Err(SessionError::InvalidTimeRange);
        }
        if !self.score.is_finite() {
            return Err(SessionError::InvalidScore(self.score));
        }
        let video = self.video.trim().to_string();
        if video.is_empty() {
            return Err(SessionError::MissingVideo);
        }

        Ok(Session {
            id: self.id,
            category: Category::from_optional(self.category.as_deref()),
            start_time: self.start_time,
            end_time: self.end_time,
            video,
            journey: self.journey,
            score: self.score,
            analysis: self.analysis,
            analysis_timestamp: self.analysis_timestamp,
            session_url: self.session_url,
        })
    }
}

/// A recorded user interaction: video, event timeline and metadata.
///
/// Sessions are loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: SessionId,
    category: Category,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    video: String,
    journey: Vec<JourneyStep>,
    score: f64,
    analysis: Option<Analysis>,
    analysis_timestamp: Option<DateTime<Utc>>,
    session_url: Option<Url>,
}

impl Session {
    pub const EMPTY_JOURNEY_PREVIEW: &'static str = "No journey steps available";

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    #[must_use]
    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    /// Session length in whole seconds.
    #[must_use]
    pub fn duration_secs(&self) -> u64 {
        whole_seconds_between(self.start_time, self.end_time)
    }

    #[must_use]
    pub fn video(&self) -> &str {
        &self.video
    }

    #[must_use]
    pub fn journey(&self) -> &[JourneyStep] {
        &self.journey
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    #[must_use]
    pub fn has_analysis(&self) -> bool {
        self.analysis.is_some()
    }

    #[must_use]
    pub fn analysis_timestamp(&self) -> Option<DateTime<Utc>> {
        self.analysis_timestamp
    }

    #[must_use]
    pub fn session_url(&self) -> Option<&Url> {
        self.session_url.as_ref()
    }

    #[must_use]
    pub fn recommendations(&self) -> &[String] {
        self.analysis
            .as_ref()
            .map(Analysis::recommendations)
            .unwrap_or_default()
    }

    /// Steps flagged as errors or rage clicks, in timeline order.
    pub fn key_events(&self) -> impl Iterator<Item = &JourneyStep> {
        self.journey.iter().filter(|step| step.is_key_event())
    }

    /// First step description, used as a card preview.
    #[must_use]
    pub fn journey_preview(&self) -> &str {
        self.journey
            .first()
            .map_or(Self::EMPTY_JOURNEY_PREVIEW, JourneyStep::description)
    }

    /// True when step times never decrease.
    #[must_use]
    pub fn journey_is_sorted(&self) -> bool {
        self.journey
            .windows(2)
            .all(|pair| pair[0].time() <= pair[1].time())
    }
}
