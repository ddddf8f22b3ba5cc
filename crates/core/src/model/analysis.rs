use serde::{Deserialize, Serialize};

/// One result set produced by the session analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Analysis attached to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub analysis_results: Vec<AnalysisResult>,
}

impl Analysis {
    /// Recommendations of the first result set; later sets are not surfaced.
    #[must_use]
    pub fn recommendations(&self) -> &[String] {
        self.analysis_results
            .first()
            .map(|result| result.recommendations.as_slice())
            .unwrap_or_default()
    }
}
