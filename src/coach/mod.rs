//! Financial coach collaborators: personalized tips and article summaries.
//!
//! # Architecture
//!
//! - `CoachBackend` trait: the two model-backed operations
//! - `CoachClient` enum: concrete wrapper with compile-time dispatch
//! - Backends: `OpenAICompatibleBackend` (chat completions over HTTP) and
//!   `MockBackend` (deterministic, no network)
//!
//! Every backend failure is reported as a single `Error::GenerationFailed`
//! with no partial output. Calls are attempted once with no timeout, so a
//! hung model server will hold the request open.
//!
//! # Configuration
//!
//! Environment variables:
//! - `COACH_BACKEND`: `openai_compatible` (default) or `mock`
//! - `COACH_HOST`: server URL (required for `openai_compatible`)
//! - `COACH_MODEL`: model name (default: gpt-4o-mini)
//! - `COACH_API_KEY`: bearer token (optional)

mod mock;
mod openai_compatible;
mod parsing;

pub use mock::MockBackend;
pub use openai_compatible::OpenAICompatibleBackend;

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 100;
pub const MIN_GOALS_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsRequest {
    pub age: u32,
    pub income: f64,
    pub financial_goals: String,
}

impl TipsRequest {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(Error::validation(
                "age",
                format!("Age must be between {MIN_AGE} and {MAX_AGE}."),
            ));
        }
        if !self.income.is_finite() || self.income < 0.0 {
            return Err(Error::validation("income", "Income cannot be negative."));
        }
        if self.financial_goals.trim().chars().count() < MIN_GOALS_CHARS {
            return Err(Error::validation(
                "financialGoals",
                "Please describe your goals in at least 10 characters.",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsResponse {
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub url: String,
}

impl SummarizeRequest {
    pub fn validate(&self) -> Result<Url> {
        let url = Url::parse(self.url.trim())
            .map_err(|e| Error::validation("url", format!("Invalid URL: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::validation(
                "url",
                format!("URL scheme must be http or https (got {other})"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Backends assume the request already passed `validate`.
#[async_trait]
pub trait CoachBackend: Send + Sync {
    async fn generate_tips(&self, request: &TipsRequest) -> Result<Vec<String>>;

    async fn summarize(&self, request: &SummarizeRequest) -> Result<String>;

    /// Model name (for logging)
    fn model(&self) -> &str;

    /// Host URL (for logging)
    fn host(&self) -> &str;
}

#[derive(Clone)]
pub enum CoachClient {
    OpenAICompatible(OpenAICompatibleBackend),
    Mock(MockBackend),
}

impl CoachClient {
    /// Returns None when the selected backend is missing its settings.
    pub fn from_env() -> Option<Self> {
        let backend =
            std::env::var("COACH_BACKEND").unwrap_or_else(|_| "openai_compatible".to_string());

        match backend.to_lowercase().as_str() {
            "openai_compatible" | "openai" => {
                OpenAICompatibleBackend::from_env().map(CoachClient::OpenAICompatible)
            }
            "mock" => Some(CoachClient::Mock(MockBackend::new())),
            _ => {
                tracing::warn!(
                    backend = %backend,
                    "Unknown COACH_BACKEND, falling back to openai_compatible"
                );
                OpenAICompatibleBackend::from_env().map(CoachClient::OpenAICompatible)
            }
        }
    }

    pub fn mock() -> Self {
        CoachClient::Mock(MockBackend::new())
    }

    /// Validates, then asks the backend. Validation problems come back as
    /// `Error::Validation`; anything else as `Error::GenerationFailed`.
    pub async fn tips(&self, request: &TipsRequest) -> Result<TipsResponse> {
        request.validate()?;
        let tips = self.generate_tips(request).await.map_err(into_generation_failed)?;
        Ok(TipsResponse { tips })
    }

    pub async fn summary(&self, request: &SummarizeRequest) -> Result<SummarizeResponse> {
        request.validate()?;
        let summary = self.summarize(request).await.map_err(into_generation_failed)?;
        Ok(SummarizeResponse { summary })
    }
}

fn into_generation_failed(err: Error) -> Error {
    match err {
        Error::GenerationFailed(_) => err,
        other => Error::GenerationFailed(other.to_string()),
    }
}

#[async_trait]
impl CoachBackend for CoachClient {
    async fn generate_tips(&self, request: &TipsRequest) -> Result<Vec<String>> {
        match self {
            CoachClient::OpenAICompatible(b) => b.generate_tips(request).await,
            CoachClient::Mock(b) => b.generate_tips(request).await,
        }
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<String> {
        match self {
            CoachClient::OpenAICompatible(b) => b.summarize(request).await,
            CoachClient::Mock(b) => b.summarize(request).await,
        }
    }

    fn model(&self) -> &str {
        match self {
            CoachClient::OpenAICompatible(b) => b.model(),
            CoachClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            CoachClient::OpenAICompatible(b) => b.host(),
            CoachClient::Mock(b) => b.host(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tips_request() -> TipsRequest {
        TipsRequest {
            age: 28,
            income: 900_000.0,
            financial_goals: "Buy a house in five years".to_string(),
        }
    }

    #[test]
    fn tips_request_validation_names_the_field() {
        assert!(tips_request().validate().is_ok());

        let mut young = tips_request();
        young.age = 15;
        assert_eq!(young.validate().unwrap_err().field(), Some("age"));

        let mut negative = tips_request();
        negative.income = -1.0;
        assert_eq!(negative.validate().unwrap_err().field(), Some("income"));

        let mut vague = tips_request();
        vague.financial_goals = "  save   ".to_string();
        assert_eq!(
            vague.validate().unwrap_err().field(),
            Some("financialGoals")
        );
    }

    #[test]
    fn summarize_request_requires_http_url() {
        let ok = SummarizeRequest {
            url: "https://example.com/article".into(),
        };
        assert_eq!(ok.validate().expect("valid").host_str(), Some("example.com"));

        for bad in ["not a url", "ftp://example.com/file", ""] {
            let req = SummarizeRequest { url: bad.into() };
            assert_eq!(req.validate().unwrap_err().field(), Some("url"), "{bad}");
        }
    }

    #[test]
    fn tips_request_deserializes_camel_case() {
        let req: TipsRequest = serde_json::from_str(
            r#"{"age": 30, "income": 50000, "financialGoals": "Retire early at 50"}"#,
        )
        .expect("parse");
        assert_eq!(req.financial_goals, "Retire early at 50");
    }

    #[tokio::test]
    async fn client_validates_before_calling_backend() {
        let client = CoachClient::Mock(MockBackend::failing());
        let mut req = tips_request();
        req.age = 5;
        let err = client.tips(&req).await.unwrap_err();
        assert_eq!(err.field(), Some("age"));
    }

    #[tokio::test]
    async fn client_reports_backend_failure_as_generation_failed() {
        let client = CoachClient::Mock(MockBackend::failing());
        let err = client.tips(&tips_request()).await.unwrap_err();
        assert!(matches!(err, Error::GenerationFailed(_)));
    }

    #[tokio::test]
    async fn mock_client_round_trip() {
        let client = CoachClient::mock();
        let tips = client.tips(&tips_request()).await.expect("tips");
        assert!(!tips.tips.is_empty());

        let summary = client
            .summary(&SummarizeRequest {
                url: "https://example.com/sip-guide".into(),
            })
            .await
            .expect("summary");
        assert!(summary.summary.contains("example.com"));
        assert_eq!(client.model(), "mock");
    }
}
