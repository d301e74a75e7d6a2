use anyhow::{Context, Result};

use crate::render::DEFAULT_THUMBNAIL_FALLBACK;

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL or file path of the content document.
    pub data_url: String,
    pub assets_dir: String,
    pub thumbnail_fallback: String,
    /// Whether pages get the reveal animator.
    pub animations: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_url: env_or("DATA_URL", "data.json"),
            assets_dir: env_or("ASSETS_DIR", "assets"),
            thumbnail_fallback: env_or("THUMBNAIL_FALLBACK", DEFAULT_THUMBNAIL_FALLBACK),
            animations: parse_flag(&env_or("ANIMATIONS", "true"))
                .context("ANIMATIONS must be true or false")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" ON ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
