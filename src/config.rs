use crate::pokedex::session;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub async fn load() -> Result<Self, anywho::Error> {
        let path = config_path();

        if !fs::try_exists(&path).await? {
            return Ok(Self::default());
        }

        let config = Self::parse(&fs::read_to_string(&path).await?)?;
        log::info!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: session::DEFAULT_BASE_URL.to_owned(),
        }
    }
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join(env!("CARGO_PKG_NAME"))
        .join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_base_url() {
        let config = Config::parse(r#"(base_url: "http://localhost:8080/api/v2")"#)
            .expect("valid config");

        assert_eq!(config.base_url, "http://localhost:8080/api/v2");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = Config::parse("()").expect("valid config");

        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(Config::parse("(base_url: 42)").is_err());
    }
}
