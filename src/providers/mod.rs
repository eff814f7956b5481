pub mod groq;
pub mod jira;

use anyhow::Result;
use async_trait::async_trait;

/// The inference side of the pipeline: one ticket text in, one raw
/// comma-separated label string out.
#[async_trait]
pub trait LabelModel: Send + Sync {
    async fn generate_labels(&self, ticket_text: &str) -> Result<String>;
}

/// The tracker side of the pipeline. Implementations recover from
/// tracker-side rejections internally; only transport failures surface
/// as errors.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    async fn add_labels(&self, issue_key: &str, labels: &[String]) -> Result<()>;
}
