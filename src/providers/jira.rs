use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{info, warn};

use super::IssueTracker;
use crate::config::JiraConfig;

pub struct JiraClient {
    base_url: String,
    auth_header: String,
    client: reqwest::Client,
}

impl JiraClient {
    pub fn new(config: &JiraConfig) -> Self {
        let creds = format!("{}:{}", config.email, config.api_token);
        let encoded = base64::engine::general_purpose::STANDARD.encode(creds);
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header: format!("Basic {encoded}"),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct UpdateRequest {
    update: UpdateFields,
}

#[derive(Serialize)]
struct UpdateFields {
    labels: Vec<LabelOp>,
}

#[derive(Serialize)]
struct LabelOp {
    add: String,
}

#[async_trait]
impl IssueTracker for JiraClient {
    /// Issue an `add` update for every label. Jira answers 204 on success;
    /// any other status is logged and swallowed, since a rejected label is
    /// not worth failing the whole event for.
    async fn add_labels(&self, issue_key: &str, labels: &[String]) -> Result<()> {
        let url = format!("{}/rest/api/2/issue/{}", self.base_url, issue_key);
        let payload = UpdateRequest {
            update: UpdateFields {
                labels: labels
                    .iter()
                    .map(|label| LabelOp { add: label.clone() })
                    .collect(),
            },
        };

        let resp = self
            .client
            .put(&url)
            .header("Authorization", &self.auth_header)
            .json(&payload)
            .send()
            .await
            .context("Jira API request failed")?;

        let status = resp.status();
        if status == StatusCode::NO_CONTENT {
            info!(issue_key, count = labels.len(), "Labels added to issue");
        } else {
            let body = resp.text().await.unwrap_or_default();
            warn!(issue_key, %status, body = %body, "Jira rejected label update");
        }
        Ok(())
    }
}
