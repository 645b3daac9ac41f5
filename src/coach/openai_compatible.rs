//! OpenAI-compatible chat completions backend.
//!
//! Works with any server exposing `/v1/chat/completions` (OpenAI, vLLM,
//! LocalAI, llama-server, Docker Model Runner).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parsing::{parse_summary, parse_tips};
use super::{CoachBackend, SummarizeRequest, TipsRequest};
use crate::error::{Error, Result};

const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone)]
pub struct OpenAICompatibleBackend {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAICompatibleBackend {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Required: `COACH_HOST`. Optional: `COACH_MODEL`, `COACH_API_KEY`.
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("COACH_HOST").ok()?;
        let model = std::env::var("COACH_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let mut backend = Self::new(&host, &model);
        backend.api_key = std::env::var("COACH_API_KEY").ok();
        Some(backend)
    }

    async fn chat_completion(&self, prompt: String) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature: Some(0.4),
            stream: false,
        };

        let mut req_builder = self
            .http_client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&request);

        if let Some(ref api_key) = self.api_key {
            req_builder = req_builder.bearer_auth(api_key);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| Error::GenerationFailed(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GenerationFailed(format!(
                "model API error {status}: {body}"
            )));
        }

        let chat_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::GenerationFailed(format!("invalid completion body: {e}")))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::GenerationFailed("no choices in model response".into()))
    }
}

fn tips_prompt(request: &TipsRequest) -> String {
    format!(
        "You are a personal finance expert. Based on the user's age, income, and financial goals, \
provide personalized financial tips.\n\n\
Age: {}\n\
Income: {}\n\
Financial Goals: {}\n\n\
Reply with only a JSON object of the form {{\"tips\": [\"...\", \"...\"]}}.",
        request.age,
        request.income,
        request.financial_goals.trim()
    )
}

fn summarize_prompt(request: &SummarizeRequest) -> String {
    format!(
        "You are an expert financial analyst. Summarize the key points of the following article.\n\n\
Article URL: {}\n\n\
Reply with only a JSON object of the form {{\"summary\": \"...\"}}.",
        request.url.trim()
    )
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl CoachBackend for OpenAICompatibleBackend {
    async fn generate_tips(&self, request: &TipsRequest) -> Result<Vec<String>> {
        let response = self.chat_completion(tips_prompt(request)).await?;
        debug!(model = %self.model, "tips response: {}", response);
        parse_tips(&response)
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<String> {
        let response = self.chat_completion(summarize_prompt(request)).await?;
        debug!(model = %self.model, "summary response: {}", response);
        parse_summary(&response)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    async fn spawn_model_server(status: StatusCode, content: &'static str) -> String {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move |Json(body): Json<Value>| async move {
                assert_eq!(body["messages"][0]["role"], "user");
                (
                    status,
                    Json(json!({
                        "choices": [{ "message": { "role": "assistant", "content": content } }]
                    })),
                )
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        format!("http://{addr}/")
    }

    fn tips_request() -> TipsRequest {
        TipsRequest {
            age: 35,
            income: 1_200_000.0,
            financial_goals: "Fund my child's education".into(),
        }
    }

    #[test]
    fn prompts_embed_request_fields() {
        let prompt = tips_prompt(&tips_request());
        assert!(prompt.contains("Age: 35"));
        assert!(prompt.contains("Financial Goals: Fund my child's education"));
        assert!(prompt.contains(r#"{"tips":"#));

        let prompt = summarize_prompt(&SummarizeRequest {
            url: " https://example.com/a ".into(),
        });
        assert!(prompt.contains("Article URL: https://example.com/a\n"));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let backend = OpenAICompatibleBackend::new("http://localhost:8080/", "llama");
        assert_eq!(backend.host(), "http://localhost:8080");
        assert_eq!(backend.model(), "llama");
    }

    #[tokio::test]
    async fn generate_tips_parses_model_reply() {
        let host = spawn_model_server(
            StatusCode::OK,
            "Here are your tips: {\"tips\": [\"Max out your PPF\", \"Keep 6 months of expenses\"]}",
        )
        .await;
        let backend = OpenAICompatibleBackend::new(&host, "test-model").with_api_key("secret");

        let tips = backend.generate_tips(&tips_request()).await.expect("tips");
        assert_eq!(tips, vec!["Max out your PPF", "Keep 6 months of expenses"]);
    }

    #[tokio::test]
    async fn server_error_is_generation_failed() {
        let host = spawn_model_server(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let backend = OpenAICompatibleBackend::new(&host, "test-model");

        let err = backend
            .summarize(&SummarizeRequest {
                url: "https://example.com".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::GenerationFailed(msg) if msg.contains("500")));
    }

    #[tokio::test]
    async fn unreachable_host_is_generation_failed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let backend = OpenAICompatibleBackend::new(&format!("http://{addr}"), "test-model");
        assert!(matches!(
            backend.generate_tips(&tips_request()).await,
            Err(Error::GenerationFailed(_))
        ));
    }
}
