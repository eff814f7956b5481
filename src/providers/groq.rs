use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::LabelModel;
use crate::config::GroqConfig;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

const MODEL: &str = "llama3-8b-8192";

const SYSTEM_PROMPT: &str = "You are an AI specialized in labeling Jira tickets. \
Your task is to analyze the semantics and key issues of each ticket to propose relevant and specific labels. \
Respond only with words separated by commas. \
Avoid using 'obvious' words (project name, issuetype, bug, priority, task...). \
Focus on context, functionality, and specific components involved. \
Consider the project's domain and common themes. \
Provide labels that capture the essence of the ticket's subject, actions, and objectives.";

#[derive(Debug, Error)]
pub enum GroqError {
    #[error("Groq API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Groq response contained no choices")]
    EmptyResponse,
}

/// Chat-completions client for Groq's OpenAI-compatible endpoint. One
/// request per ticket; no retry, and the reqwest default timeout applies.
pub struct GroqClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: &GroqConfig) -> Self {
        Self::with_base_url(config.api_key.clone(), DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    stop: Option<&'a str>,
    stream: bool,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[async_trait]
impl LabelModel for GroqClient {
    async fn generate_labels(&self, ticket_text: &str) -> Result<String> {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: ticket_text,
                },
            ],
            temperature: 0.3,
            max_tokens: 256,
            top_p: 1.0,
            stop: None,
            stream: false,
        };

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Groq API request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GroqError::Api { status, body }.into());
        }

        let chat: ChatResponse = resp
            .json()
            .await
            .context("Failed to parse Groq response")?;
        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GroqError::EmptyResponse)?;

        debug!(labels = %content, "Model responded");
        Ok(content)
    }
}
