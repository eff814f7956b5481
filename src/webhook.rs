use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// One inbound webhook notification from the tracker. Unknown fields are
/// ignored; everything beyond the event name is optional so that parsing
/// never fails on payloads we do not act on.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "webhookEvent")]
    pub webhook_event: String,
    pub issue: Option<Issue>,
}

#[derive(Debug, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: Value,
    pub project: Option<NamedField>,
    #[serde(rename = "issuetype")]
    pub issue_type: Option<NamedField>,
}

#[derive(Debug, Deserialize)]
pub struct NamedField {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    IssueCreated,
    IssueUpdated,
    Other,
}

impl WebhookPayload {
    /// Jira sends `jira:issue_created`; the bare form is accepted too.
    pub fn kind(&self) -> EventKind {
        let name = self
            .webhook_event
            .strip_prefix("jira:")
            .unwrap_or(&self.webhook_event);
        match name {
            "issue_created" => EventKind::IssueCreated,
            "issue_updated" => EventKind::IssueUpdated,
            _ => EventKind::Other,
        }
    }
}

/// Normalized ticket text for one created issue, ready to hand to the
/// label model.
#[derive(Debug, Clone)]
pub struct TicketBundle {
    pub issue_key: String,
    pub text: String,
}

/// Extract the issue key and ticket text from a creation event. Missing
/// summary or description default to empty; a missing issue, project, or
/// issue type ends processing for this event.
pub fn creation_bundle(payload: &WebhookPayload) -> Result<TicketBundle> {
    let issue = payload.issue.as_ref().context("payload has no issue")?;
    let fields = &issue.fields;
    let project = fields.project.as_ref().context("issue has no project")?;
    let issue_type = fields
        .issue_type
        .as_ref()
        .context("issue has no issue type")?;

    let text = format!(
        "Summary: {}\nDescription: {}\nProject: {}, Issue Type: {}",
        fields.summary,
        render_description(&fields.description),
        project.name,
        issue_type.name,
    );

    Ok(TicketBundle {
        issue_key: issue.key.clone(),
        text,
    })
}

/// Jira may deliver the description as a plain string or as a rich-text
/// document; either way it is passed through into the ticket text.
fn render_description(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
