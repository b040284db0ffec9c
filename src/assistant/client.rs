use crate::assistant::chat::{ChatMessage, Role};
use crate::assistant::compounds::{CompoundInfo, parse_compounds};
use crate::assistant::ChemistryBackend;
use crate::chemistry::ElementRecord;
use crate::config::ApiConfig;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const CHAT_SYSTEM_PROMPT: &str = "You are Titan, an advanced AI chemistry assistant embedded in an interactive periodic table. Your goal is to help users understand elements, chemical properties, and periodic trends. Keep your answers concise, accurate, and scientifically sound. If asked about non-chemistry topics, politely steer the conversation back to science.";

pub const COMPOUND_SYSTEM_PROMPT: &str =
    "You are a helpful chemistry assistant. You output strict JSON.";

pub const NO_RESPONSE: &str = "No response generated.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no API key configured")]
    MissingCredential,
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    #[error("service answered with HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Malformed(err.to_string())
        } else {
            ApiError::Transport(err)
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> WireMessage<'a> {
    fn system(content: &'a str) -> Self {
        Self {
            role: "system",
            content,
        }
    }

    fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }

    fn from_chat(message: &'a ChatMessage) -> Self {
        let role = match message.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role,
            content: &message.text,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl CompletionResponse {
    /// First choice's text; empty text counts as missing.
    fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
    }
}

/// System prompt followed by the transcript, local-only entries skipped.
fn chat_messages(history: &[ChatMessage]) -> Vec<WireMessage<'_>> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(WireMessage::system(CHAT_SYSTEM_PROMPT));
    messages.extend(
        history
            .iter()
            .filter(|message| !message.local)
            .map(WireMessage::from_chat),
    );
    messages
}

pub fn compound_prompt(element: &ElementRecord) -> String {
    format!(
        r#"Provide 5 common chemical compounds/formulas involving the element {name} ({symbol}).
For each, include the chemical formula, the common name, the ratio of atoms (e.g., "2:1 Hydrogen to Oxygen"), and a very brief description.
If the element is a noble gas or generally unreactive, mention that or hypothetical compounds.

IMPORTANT: Return the result as a raw JSON array of objects. Do not include markdown formatting like ```json.

Expected JSON format:
[
  {{
    "formula": "H2O",
    "name": "Water",
    "ratio": "2:1 Hydrogen to Oxygen",
    "description": "Essential for life."
  }}
]"#,
        name = element.name,
        symbol = element.symbol,
    )
}

/// OpenRouter-compatible `/chat/completions` client. Cheap to clone.
#[derive(Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
}

impl OpenRouterClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn complete(&self, messages: Vec<WireMessage<'_>>) -> Result<Option<String>, ApiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ApiError::MissingCredential)?;

        let body = CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
        };

        debug!(
            "POST {} ({} messages, model {})",
            self.endpoint(),
            body.messages.len(),
            body.model
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .header("HTTP-Referer", self.config.referer.as_str())
            .header("X-Title", self.config.title.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let payload: CompletionResponse = response.json().await?;
        Ok(payload.into_content())
    }
}

impl ChemistryBackend for OpenRouterClient {
    async fn compounds(&self, element: &ElementRecord) -> Result<Vec<CompoundInfo>, ApiError> {
        let prompt = compound_prompt(element);
        let messages = vec![
            WireMessage::system(COMPOUND_SYSTEM_PROMPT),
            WireMessage::user(&prompt),
        ];
        let content = self.complete(messages).await?;
        parse_compounds(content.as_deref().unwrap_or("[]"))
    }

    async fn chat(&self, history: &[ChatMessage]) -> Result<String, ApiError> {
        let content = self.complete(chat_messages(history)).await?;
        Ok(content.unwrap_or_else(|| NO_RESPONSE.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_content_defaults_when_missing() {
        let empty: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(empty.into_content(), None);

        let blank: CompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": ""}}]}"#).unwrap();
        assert_eq!(blank.into_content(), None);

        let no_choices: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(no_choices.into_content(), None);

        let full: CompletionResponse = serde_json::from_str(
            r#"{"id": "x", "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hi"}}]}"#,
        )
        .unwrap();
        assert_eq!(full.into_content().as_deref(), Some("Hi"));
    }

    #[test]
    fn request_body_matches_the_wire_format() {
        let history = vec![ChatMessage {
            id: 2,
            role: Role::User,
            text: "Why is gold yellow?".to_owned(),
            local: false,
        }];
        let body = CompletionRequest {
            model: "test-model",
            messages: chat_messages(&history),
            temperature: 0.7,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Why is gold yellow?");
        assert!(json["temperature"].as_f64().unwrap() > 0.69);
    }

    #[test]
    fn local_entries_never_reach_the_wire() {
        let message = |id, role, text: &str, local| ChatMessage {
            id,
            role,
            text: text.to_owned(),
            local,
        };
        let history = vec![
            message(1, Role::Assistant, "greeting", true),
            message(2, Role::User, "lost question", true),
            message(3, Role::Assistant, "apology", true),
            message(4, Role::User, "What is argon?", false),
        ];
        let messages = chat_messages(&history);
        let wire: Vec<(&str, &str)> = messages.iter().map(|m| (m.role, m.content)).collect();
        assert_eq!(
            wire,
            [("system", CHAT_SYSTEM_PROMPT), ("user", "What is argon?")]
        );
    }

    #[test]
    fn compound_prompt_names_the_element_and_forbids_fences() {
        let neon = ElementRecord::by_atomic_number(10).unwrap();
        let prompt = compound_prompt(neon);
        assert!(prompt.contains("Neon (Ne)"));
        assert!(prompt.contains("5 common chemical compounds"));
        assert!(prompt.contains("raw JSON array"));
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:9/api/v1/".to_owned(),
            ..ApiConfig::default()
        };
        let client = OpenRouterClient::new(config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9/api/v1/chat/completions");
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let config = ApiConfig {
            api_key: None,
            ..ApiConfig::default()
        };
        let client = OpenRouterClient::new(config).unwrap();
        let neon = ElementRecord::by_atomic_number(10).unwrap();
        assert!(matches!(
            client.compounds(neon).await,
            Err(ApiError::MissingCredential)
        ));
        assert!(matches!(client.chat(&[]).await, Err(ApiError::MissingCredential)));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".to_owned(),
            api_key: Some("test-key".to_owned()),
            timeout_secs: 2,
            ..ApiConfig::default()
        };
        let client = OpenRouterClient::new(config).unwrap();
        let result = client.chat(&[]).await;
        assert!(
            matches!(result, Err(ApiError::Transport(_)) | Err(ApiError::Timeout)),
            "{result:?}"
        );
    }
}
