use replay_core::model::CanvasId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Provider/model pair selected for text or image generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelChoice {
    pub provider: String,
    pub model: String,
}

impl ModelChoice {
    #[must_use]
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }

    /// Parse `provider:model`; the model part may itself contain `/` or `:`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (provider, model) = raw.trim().split_once(':')?;
        if provider.is_empty() || model.is_empty() {
            return None;
        }
        Some(Self::new(provider, model))
    }

    #[must_use]
    pub fn default_text() -> Self {
        Self::new("openai", "gpt-4o")
    }

    #[must_use]
    pub fn default_image() -> Self {
        Self::new("openai", "gpt-image-1")
    }
}

/// Request accepted by the canvas collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasRequest {
    pub name: String,
    pub canvas_id: CanvasId,
    pub messages: Vec<ChatMessage>,
    pub session_id: String,
    pub text_model: ModelChoice,
    pub image_model: ModelChoice,
    pub system_prompt: String,
}

/// Successful reply from the canvas collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CanvasCreated {
    pub id: CanvasId,
}
