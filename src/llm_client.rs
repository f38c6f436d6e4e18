use std::collections::VecDeque;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("missing DEEPSEEK_API_KEY")]
    MissingApiKey,
    #[error("http error: {0}")]
    Http(String),
    #[error("authentication rejected by chat api (401)")]
    Auth,
    #[error("chat api error: {0} {1}")]
    Upstream(u16, String),
    #[error("empty response")]
    EmptyResponse,
    #[error("mock responses exhausted")]
    MockExhausted,
}

pub struct DeepSeekClient {
    api_key: String,
    api_url: String,
    model: String,
    client: Client,
}

impl DeepSeekClient {
    /// No request timeout is configured beyond reqwest's default: a
    /// slow upstream call blocks its request for as long as it takes.
    pub fn new(config: &Config) -> Result<Self, ChatError> {
        if config.api_key.is_empty() {
            return Err(ChatError::MissingApiKey);
        }
        let client = Client::builder()
            .build()
            .map_err(|e| ChatError::Http(e.to_string()))?;
        Ok(Self {
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            client,
        })
    }

    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ChatError> {
        let body = CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: 0.7,
            max_tokens,
        };
        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Http(e.to_string()))?;
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ChatError::Auth);
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ChatError::Upstream(status.as_u16(), text));
        }
        let parsed: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| ChatError::Http(e.to_string()))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ChatError::EmptyResponse)?;
        Ok(content)
    }
}

/// Scripted stand-in for tests: each `complete` call pops the next
/// reply or failure in order.
pub struct MockChat {
    replies: Mutex<VecDeque<Result<String, ChatError>>>,
}

impl MockChat {
    pub fn new(replies: Vec<Result<String, ChatError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }

    pub async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String, ChatError> {
        let mut guard = self.replies.lock().await;
        guard.pop_front().unwrap_or(Err(ChatError::MockExhausted))
    }

    pub async fn remaining(&self) -> usize {
        self.replies.lock().await.len()
    }
}

pub enum ChatClient {
    DeepSeek(DeepSeekClient),
    Mock(MockChat),
}

impl ChatClient {
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ChatError> {
        match self {
            ChatClient::DeepSeek(client) => client.complete(prompt, max_tokens).await,
            ChatClient::Mock(client) => client.complete(prompt, max_tokens).await,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}
