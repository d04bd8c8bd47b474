use anyhow::{Context, Result};

const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_DATABASE_URL: &str = "sqlite://postwise.db";
const DEFAULT_FEW_SHOT_PATH: &str = "data/processed_posts.json";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// LinkedIn OAuth application credentials. All three must be set together.
#[derive(Debug, Clone)]
pub struct LinkedinConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub few_shot_posts_path: String,
    pub linkedin: Option<LinkedinConfig>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            database_url: get("DATABASE_URL", DEFAULT_DATABASE_URL),
            groq_api_key: lookup("GROQ_API_KEY")
                .filter(|v| !v.trim().is_empty())
                .context("Required environment variable 'GROQ_API_KEY' is not set")?,
            groq_api_url: get("GROQ_API_URL", DEFAULT_GROQ_API_URL),
            few_shot_posts_path: get("FEW_SHOT_POSTS_PATH", DEFAULT_FEW_SHOT_PATH),
            linkedin: linkedin_config(&lookup)?,
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            port: get("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG", "info"),
        })
    }
}

fn linkedin_config<F>(lookup: &F) -> Result<Option<LinkedinConfig>>
where
    F: Fn(&str) -> Option<String>,
{
    let parts = (
        lookup("LINKEDIN_CLIENT_ID"),
        lookup("LINKEDIN_CLIENT_SECRET"),
        lookup("LINKEDIN_REDIRECT_URI"),
    );
    match parts {
        (Some(client_id), Some(client_secret), Some(redirect_uri)) => Ok(Some(LinkedinConfig {
            client_id,
            client_secret,
            redirect_uri,
        })),
        (None, None, None) => Ok(None),
        _ => anyhow::bail!(
            "LINKEDIN_CLIENT_ID, LINKEDIN_CLIENT_SECRET and LINKEDIN_REDIRECT_URI must be set together"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_only_api_key() {
        let config = config_from(&[("GROQ_API_KEY", "gsk_test")]).unwrap();
        assert_eq!(config.groq_api_url, DEFAULT_GROQ_API_URL);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.few_shot_posts_path, DEFAULT_FEW_SHOT_PATH);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.linkedin.is_none());
    }

    #[test]
    fn test_missing_api_key_fails() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("GROQ_API_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_invalid_port_fails() {
        assert!(config_from(&[("GROQ_API_KEY", "k"), ("PORT", "http")]).is_err());
    }

    #[test]
    fn test_linkedin_group_must_be_complete() {
        let partial = config_from(&[("GROQ_API_KEY", "k"), ("LINKEDIN_CLIENT_ID", "id")]);
        assert!(partial.is_err());

        let full = config_from(&[
            ("GROQ_API_KEY", "k"),
            ("LINKEDIN_CLIENT_ID", "id"),
            ("LINKEDIN_CLIENT_SECRET", "secret"),
            ("LINKEDIN_REDIRECT_URI", "http://localhost/cb"),
        ])
        .unwrap();
        assert_eq!(full.linkedin.unwrap().client_id, "id");
    }
}
