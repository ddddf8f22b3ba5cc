use serde::Serialize;
use thiserror::Error;

/// Description fragments that mark a step as a key event worth jumping to.
pub const KEY_EVENT_MARKERS: [&str; 2] = ["Error Detected", "Rage Click"];

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum JourneyError {
    #[error("step time must be finite, got {0}")]
    NonFiniteTime(f64),

    #[error("step time must not be negative, got {0}")]
    NegativeTime(f64),
}

/// A single timestamped event within a session's timeline.
///
/// `time` is measured in seconds from the start of the session video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyStep {
    description: String,
    time: f64,
}

impl JourneyStep {
    /// Build a step, validating the timestamp.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError` if `time` is negative or not finite.
    pub fn new(description: impl Into<String>, time: f64) -> Result<Self, JourneyError> {
        if !time.is_finite() {
            return Err(JourneyError::NonFiniteTime(time));
        }
        if time < 0.0 {
            return Err(JourneyError::NegativeTime(time));
        }
        Ok(Self {
            description: description.into(),
            time,
        })
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn is_key_event(&self) -> bool {
        KEY_EVENT_MARKERS
            .iter()
            .any(|marker| self.description.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_non_finite_times() {
        assert_eq!(
            JourneyStep::new("x", -1.0).unwrap_err(),
            JourneyError::NegativeTime(-1.0)
        );
        assert!(matches!(
            JourneyStep::new("x", f64::INFINITY),
            Err(JourneyError::NonFiniteTime(_))
        ));
        assert!(JourneyStep::new("x", f64::NAN).is_err());
        assert!(JourneyStep::new("x", 0.0).is_ok());
    }

    #[test]
    fn key_events_match_markers() {
        let error = JourneyStep::new("Error Detected: 500 on /cart", 3.0).unwrap();
        let rage = JourneyStep::new("Rage Click on Pay button", 4.0).unwrap();
        let plain = JourneyStep::new("Clicked Home", 1.0).unwrap();
        assert!(error.is_key_event());
        assert!(rage.is_key_event());
        assert!(!plain.is_key_event());
    }
}
