use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

/// Documented fallback secret. Deployments must override it.
pub const DEFAULT_WEBHOOK_TOKEN: &str = "change-me";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Shared secret expected in the `X-Webhook-Token` header. An empty
    /// value disables the check.
    #[serde(default = "default_webhook_token")]
    pub webhook_token: String,
}

impl Config {
    /// The token webhook callers must present, if any.
    pub fn webhook_token(&self) -> Option<String> {
        if self.webhook_token.is_empty() {
            None
        } else {
            Some(self.webhook_token.clone())
        }
    }

    pub fn uses_default_token(&self) -> bool {
        self.webhook_token == DEFAULT_WEBHOOK_TOKEN
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            database_path: default_database_path(),
            webhook_token: default_webhook_token(),
        }
    }
}

const fn default_port() -> u16 {
    8000
}

fn default_database_path() -> String {
    "database.db".to_string()
}

fn default_webhook_token() -> String {
    DEFAULT_WEBHOOK_TOKEN.to_string()
}

/// Applies `PORT`, `DATABASE_PATH` and `WEBHOOK_TOKEN` on top of `config`.
fn apply_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config, Box<dyn std::error::Error>> {
    if let Some(port) = lookup("PORT") {
        config.port = port
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse PORT: {e}"))?;
    }

    if let Some(database_path) = lookup("DATABASE_PATH") {
        config.database_path = database_path;
    }

    if let Some(webhook_token) = lookup("WEBHOOK_TOKEN") {
        config.webhook_token = webhook_token;
    }

    Ok(config)
}

fn load_from_file(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(Into::into)
}

/// Reads the config file, if any, then lets environment variables override it.
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let config = load_base_config()?;
    apply_env_overrides(config, |name| env::var(name).ok())
}

fn load_base_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path = env::var("NOTES_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        return load_from_file(&config_path);
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.example.yaml'\
             \n This file should not be used and should be replaced with actual data",
            config_path
        );
        return load_from_file("config.example.yaml");
    }

    // Environment variables only
    tracing::info!(
        "No config file found, loading configuration from defaults and environment variables"
    );
    Ok(Config::default())
}
