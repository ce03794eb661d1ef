//! Chat completion client for Groq's OpenAI-compatible API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use paralegal::{CompletionService, Error, Result};

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection and sampling settings.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GroqConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Blocking completion client. One request per call, no retries.
pub struct GroqClient {
    http: reqwest::blocking::Client,
    config: GroqConfig,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::Generation("GROQ_API_KEY is empty".into()));
        }

        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("paralegal/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Generation(format!("HTTP client setup failed: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

impl CompletionService for GroqClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let url = self.config.endpoint();
        log::debug!("POST {} (model {})", url, self.config.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(prompt))
            .send()
            .map_err(|e| Error::Generation(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::Generation(format!("reading response failed: {e}")))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            return Err(Error::Generation(format!("HTTP {status}: {detail}")));
        }

        parse_reply(&body)
    }
}

fn parse_reply(body: &str) -> Result<String> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| Error::Generation(format!("malformed response: {e}")))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| Error::Generation("response contained no message".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let client = GroqClient::new(GroqConfig::new("test-key")).unwrap();
        let json = serde_json::to_value(client.request_body("Draft an NDA")).unwrap();

        assert_eq!(json["model"], DEFAULT_MODEL);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Draft an NDA");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["max_tokens"], 2048);
    }

    #[test]
    fn test_endpoint_trims_slash() {
        let config = GroqConfig::new("k").with_base_url("http://localhost:8080/v1/");
        assert_eq!(config.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            GroqClient::new(GroqConfig::new("  ")),
            Err(Error::Generation(_))
        ));
    }

    #[test]
    fn test_parse_reply() {
        let body = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"WHEREAS"}}]}"#;
        assert_eq!(parse_reply(body).unwrap(), "WHEREAS");
    }

    #[test]
    fn test_parse_reply_without_choices() {
        let err = parse_reply(r#"{"choices":[]}"#).unwrap_err();
        assert!(err.to_string().contains("no message"));

        let err = parse_reply("<html>").unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }
}
