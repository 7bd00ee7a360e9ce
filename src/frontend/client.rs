//! HTTP client for the recommendation backend

use async_trait::async_trait;
use std::fmt;

use crate::models::{BookRequest, ErrorDetail, RecommendedBook};

/// Shown when a failure carries no server-provided detail
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Non-2xx answer; `detail` is absent when the body had none
    Backend { status: u16, detail: Option<String> },
    /// Connection or I/O failure
    Transport(String),
    /// 2xx answer whose body was not a list of books
    Decode(String),
}

impl ClientError {
    /// Text rendered for the user
    pub fn display_message(&self) -> &str {
        match self {
            ClientError::Backend {
                detail: Some(detail),
                ..
            } => detail,
            _ => FALLBACK_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Backend { status, detail } => write!(
                f,
                "Backend returned {}: {}",
                status,
                detail.as_deref().unwrap_or("no detail")
            ),
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

#[async_trait]
pub trait RecommendationApi: Send + Sync {
    async fn recommend(&self, title: &str) -> Result<Vec<RecommendedBook>, ClientError>;
}

#[derive(Clone)]
pub struct HttpRecommendationClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecommendationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/recommend_book", self.base_url)
    }
}

#[async_trait]
impl RecommendationApi for HttpRecommendationClient {
    async fn recommend(&self, title: &str) -> Result<Vec<RecommendedBook>, ClientError> {
        let resp = self
            .client
            .post(self.endpoint())
            .json(&BookRequest {
                title: title.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.json::<ErrorDetail>().await.ok().map(|e| e.detail);
            return Err(ClientError::Backend {
                status: status.as_u16(),
                detail,
            });
        }

        resp.json::<Vec<RecommendedBook>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
