use anyhow::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::labels::sanitize_labels;
use crate::providers::groq::GroqClient;
use crate::providers::jira::JiraClient;
use crate::providers::{IssueTracker, LabelModel};

/// Runs the full label chain for one created issue: model call, token
/// sanitization, tracker write-back. One blocking sequential chain per
/// event; a model failure aborts the chain before any write-back.
pub struct LabelPipeline {
    model: Box<dyn LabelModel>,
    tracker: Box<dyn IssueTracker>,
}

impl LabelPipeline {
    pub fn new(model: Box<dyn LabelModel>, tracker: Box<dyn IssueTracker>) -> Self {
        Self { model, tracker }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Box::new(GroqClient::new(&config.groq)),
            Box::new(JiraClient::new(&config.jira)),
        )
    }

    pub async fn label_issue(&self, issue_key: &str, ticket_text: &str) -> Result<()> {
        let raw = self.model.generate_labels(ticket_text).await?;
        info!(issue_key, labels = %raw, "Generated labels");

        let labels = sanitize_labels(&raw);
        self.tracker.add_labels(issue_key, &labels).await
    }
}
