use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::model::{CanvasCreated, CanvasRequest};
use crate::error::CanvasError;

/// External collaborator that creates a canvas and returns its identifier.
#[async_trait]
pub trait CanvasApi: Send + Sync {
    /// Create a canvas from the request.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError` when the request fails or is rejected.
    async fn create_canvas(&self, request: &CanvasRequest) -> Result<CanvasCreated, CanvasError>;
}

/// `CanvasApi` over HTTP: `POST {base_url}/api/canvas` with a JSON body.
#[derive(Clone)]
pub struct HttpCanvasApi {
    client: Client,
    base_url: String,
}

impl HttpCanvasApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/api/canvas", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CanvasApi for HttpCanvasApi {
    async fn create_canvas(&self, request: &CanvasRequest) -> Result<CanvasCreated, CanvasError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(rejection(status.as_u16(), &body));
        }

        let created: CanvasCreated = response.json().await?;
        if created.id.as_str().trim().is_empty() {
            return Err(CanvasError::MissingId);
        }
        Ok(created)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "detail", alias = "error")]
    message: String,
}

const MAX_RAW_MESSAGE: usize = 200;

/// Map a non-success reply onto `CanvasError::Rejected`, keeping the server's message.
pub(crate) fn rejection(status: u16, body: &str) -> CanvasError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => body.trim().chars().take(MAX_RAW_MESSAGE).collect(),
    };
    CanvasError::Rejected { status, message }
}
