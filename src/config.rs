use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Process-wide configuration, built once at startup and injected into
/// the chat client. Request-handling code never reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key =
            std::env::var("DEEPSEEK_API_KEY").context("DEEPSEEK_API_KEY must be set")?;
        let api_url =
            std::env::var("DEEPSEEK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model =
            std::env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            api_url,
            model,
        })
    }
}
