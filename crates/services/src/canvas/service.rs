use std::env;
use std::sync::Arc;

use replay_core::model::CanvasId;

use super::api::{CanvasApi, HttpCanvasApi};
use super::model::{CanvasCreated, CanvasRequest, ChatMessage, ModelChoice};
use super::prompt::DEFAULT_SYSTEM_PROMPT;
use crate::error::CanvasError;

pub const DEFAULT_CANVAS_API_URL: &str = "http://localhost:57988";
pub const DEFAULT_CANVAS_NAME: &str = "New Canvas";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasConfig {
    pub base_url: String,
    pub system_prompt: String,
    pub text_model: ModelChoice,
    pub image_model: ModelChoice,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CANVAS_API_URL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            text_model: ModelChoice::default_text(),
            image_model: ModelChoice::default_image(),
        }
    }
}

impl CanvasConfig {
    /// Read `REPLAY_API_URL`, `REPLAY_SYSTEM_PROMPT`, `REPLAY_TEXT_MODEL` and
    /// `REPLAY_IMAGE_MODEL`, falling back to defaults for unset or blank values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_blank("REPLAY_API_URL").unwrap_or(defaults.base_url),
            system_prompt: non_blank("REPLAY_SYSTEM_PROMPT").unwrap_or(defaults.system_prompt),
            text_model: non_blank("REPLAY_TEXT_MODEL")
                .and_then(|v| ModelChoice::parse(&v))
                .unwrap_or(defaults.text_model),
            image_model: non_blank("REPLAY_IMAGE_MODEL")
                .and_then(|v| ModelChoice::parse(&v))
                .unwrap_or(defaults.image_model),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Builds canvas requests from a prompt and hands them to the collaborator.
#[derive(Clone)]
pub struct CanvasService {
    api: Arc<dyn CanvasApi>,
    config: CanvasConfig,
}

impl CanvasService {
    #[must_use]
    pub fn new(api: Arc<dyn CanvasApi>, config: CanvasConfig) -> Self {
        Self { api, config }
    }

    #[must_use]
    pub fn http(config: CanvasConfig) -> Self {
        let api: Arc<dyn CanvasApi> = Arc::new(HttpCanvasApi::new(config.base_url.clone()));
        Self::new(api, config)
    }

    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Build a request for a single user prompt with fresh ids.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::EmptyPrompt` if the prompt is blank.
    pub fn build_request(&self, prompt: &str) -> Result<CanvasRequest, CanvasError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(CanvasError::EmptyPrompt);
        }
        Ok(CanvasRequest {
            name: DEFAULT_CANVAS_NAME.to_string(),
            canvas_id: CanvasId::random(),
            messages: vec![ChatMessage::user(prompt)],
            session_id: CanvasId::random().to_string(),
            text_model: self.config.text_model.clone(),
            image_model: self.config.image_model.clone(),
            system_prompt: self.config.system_prompt.clone(),
        })
    }

    /// Create a canvas from a prompt. Failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError` for blank prompts or collaborator failures.
    pub async fn create_from_prompt(&self, prompt: &str) -> Result<CanvasCreated, CanvasError> {
        let request = self.build_request(prompt)?;
        match self.api.create_canvas(&request).await {
            Ok(created) => {
                tracing::info!(canvas_id = %created.id, "canvas created");
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(error = %err, "canvas creation failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverCalled;

    #[async_trait::async_trait]
    impl CanvasApi for NeverCalled {
        async fn create_canvas(&self, _: &CanvasRequest) -> Result<CanvasCreated, CanvasError> {
            unreachable!("blank prompts must not reach the collaborator")
        }
    }

    #[test]
    fn build_request_uses_config_and_fresh_ids() {
        let config = CanvasConfig {
            system_prompt: "custom".to_string(),
            ..CanvasConfig::default()
        };
        let service = CanvasService::new(Arc::new(NeverCalled), config);

        let first = service.build_request("  a retro poster ").unwrap();
        let second = service.build_request("a retro poster").unwrap();

        assert_eq!(first.name, DEFAULT_CANVAS_NAME);
        assert_eq!(first.system_prompt, "custom");
        assert_eq!(first.messages, vec![ChatMessage::user("a retro poster")]);
        assert_ne!(first.canvas_id, second.canvas_id);
        assert_ne!(first.session_id, second.session_id);
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected_locally() {
        let service = CanvasService::new(Arc::new(NeverCalled), CanvasConfig::default());
        let err = service.create_from_prompt("   ").await.unwrap_err();
        assert!(matches!(err, CanvasError::EmptyPrompt));
    }
}
