// mock_interviewer/src/services/openai.rs

//! `StageExecutor` backed by an OpenAI-compatible chat-completions endpoint.

use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stagechain::{ExecutorError, StageExecutor, StageRequest};
use std::time::Duration;
use tracing::{debug, instrument, warn};

// Longest slice of an error body carried into `ExecutorError::Rejected`.
const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
  pub role: String,
  pub content: String,
}

impl ChatMessage {
  fn system(content: impl Into<String>) -> Self {
    Self {
      role: "system".to_string(),
      content: content.into(),
    }
  }

  fn user(content: impl Into<String>) -> Self {
    Self {
      role: "user".to_string(),
      content: content.into(),
    }
  }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
  model: &'a str,
  messages: Vec<ChatMessage>,
  temperature: f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
  #[serde(default)]
  choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
  message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
  #[serde(default)]
  content: Option<String>,
}

/// Sends each stage as a single chat completion. No retries.
#[derive(Debug, Clone)]
pub struct OpenAiExecutor {
  client: reqwest::Client,
  endpoint: String,
  api_key: String,
  model: String,
  temperature: f32,
  max_tokens: Option<u32>,
  timeout: Duration,
}

impl OpenAiExecutor {
  pub fn new(config: &AppConfig) -> AppResult<Self> {
    let client = reqwest::Client::builder()
      .timeout(config.request_timeout)
      .build()
      .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

    Ok(Self {
      client,
      endpoint: format!("{}/chat/completions", config.base_url),
      api_key: config.api_key.clone(),
      model: config.model.clone(),
      temperature: config.temperature,
      max_tokens: config.max_tokens,
      timeout: config.request_timeout,
    })
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  fn map_transport_error(&self, err: reqwest::Error) -> ExecutorError {
    if err.is_timeout() {
      ExecutorError::Timeout {
        seconds: self.timeout.as_secs(),
      }
    } else {
      ExecutorError::Transport(err.to_string())
    }
  }
}

#[async_trait]
impl StageExecutor for OpenAiExecutor {
  #[instrument(name = "OpenAiExecutor::execute", skip_all, fields(stage = request.stage_name, model = %self.model))]
  async fn execute(&self, request: StageRequest<'_>) -> Result<String, ExecutorError> {
    let body = ChatCompletionRequest {
      model: &self.model,
      messages: build_messages(&request),
      temperature: self.temperature,
      max_tokens: self.max_tokens,
    };

    let response = self
      .client
      .post(&self.endpoint)
      .bearer_auth(&self.api_key)
      .json(&body)
      .send()
      .await
      .map_err(|e| self.map_transport_error(e))?;

    let status = response.status();
    if !status.is_success() {
      let text = response.text().await.unwrap_or_default();
      let message: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
      warn!(status = status.as_u16(), "Completion request rejected.");
      return Err(ExecutorError::Rejected {
        status: status.as_u16(),
        message,
      });
    }

    let raw = response.bytes().await.map_err(|e| self.map_transport_error(e))?;
    let content = extract_content(&raw)?;
    debug!(chars = content.chars().count(), "Completion received.");
    Ok(content)
  }
}

/// Pulls the first choice's text out of a chat-completions body.
pub fn extract_content(raw: &[u8]) -> Result<String, ExecutorError> {
  let parsed: ChatCompletionResponse =
    serde_json::from_slice(raw).map_err(|e| ExecutorError::Malformed(e.to_string()))?;
  parsed
    .choices
    .into_iter()
    .next()
    .and_then(|choice| choice.message.content)
    .filter(|content| !content.trim().is_empty())
    .ok_or(ExecutorError::EmptyResponse)
}

/// System message from the persona (if any), then one user message carrying
/// the instruction, the expected output and each prior stage's output.
pub fn build_messages(request: &StageRequest<'_>) -> Vec<ChatMessage> {
  let mut messages = Vec::with_capacity(2);

  if let Some(persona) = request.persona {
    messages.push(ChatMessage::system(format!(
      "You are the {}.\nYour goal: {}\n\n{}",
      persona.role, persona.goal, persona.backstory
    )));
  }

  let mut prompt = String::new();
  prompt.push_str(request.instruction.trim_end());
  prompt.push_str("\n\n# Expected output\n");
  prompt.push_str(request.output_contract.trim_end());

  if !request.context.is_empty() {
    prompt.push_str("\n\n# Context from earlier stages");
    for result in request.context {
      prompt.push_str(&format!("\n\n## Output of stage '{}'\n{}", result.stage_name, result.output_text.trim_end()));
    }
  }

  messages.push(ChatMessage::user(prompt));
  messages
}
