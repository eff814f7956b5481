use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jira: JiraConfig,
    pub groq: GroqConfig,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
}

/// Load configuration from the environment, honoring a `.env` file when one
/// is present. Called once at startup; the result is passed down explicitly.
pub fn load_config() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();

    Ok(AppConfig {
        jira: JiraConfig {
            base_url: require_env("JIRA_API_URL")?,
            email: require_env("JIRA_API_EMAIL")?,
            api_token: require_env("JIRA_API_TOKEN")?,
        },
        groq: GroqConfig {
            api_key: require_env("GROQ_API_KEY")?,
        },
        port: match std::env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT is not a valid port number")?,
            Err(_) => DEFAULT_PORT,
        },
    })
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} is not set"))
}
