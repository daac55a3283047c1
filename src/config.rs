use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub state_db_path: String,
    pub search: Search,
    pub source: Source,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Search {
    // Name of the key-value entry the term is persisted under.
    #[serde(default = "search_key")]
    pub key: String,
    // Fallback when no term has ever been persisted.
    #[serde(default = "default_term")]
    pub default_term: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Source {
    // Simulated resolution delay of the mock fetch, e.g. "2s".
    pub delay: String,
}

impl Source {
    pub fn delay(&self) -> Result<Duration> {
        duration_str::parse(self.delay.as_str()).map_err(Into::into)
    }
}

impl Config {
    pub async fn load(path: impl AsRef<Path> + Display) -> Result<Config> {
        if !fs::try_exists(&path).await? {
            log::warn!("{path} not found: writing default config and exiting");
            let default_config = Config::default();
            fs::write(&path, toml::to_string(&default_config)?).await?;
            log::warn!("Default config written to {path}, exiting");
            std::process::exit(0);
        }

        let file = fs::read_to_string(&path).await?;
        toml::from_str(file.as_str()).map_err(Into::into)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_db_path: "state.db".to_string(),
            search: Search {
                key: search_key(),
                default_term: default_term(),
            },
            source: Source {
                delay: "2s".to_string(),
            },
        }
    }
}

// Serde default generators
fn search_key() -> String {
    "search".to_string()
}

fn default_term() -> String {
    "React".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let serialized = toml::to_string(&Config::default()).expect("serialization failed");
        let config: Config = toml::from_str(serialized.as_str()).expect("deserialization failed");

        assert_eq!(config.state_db_path, "state.db");
        assert_eq!(config.search.key, "search");
        assert_eq!(config.search.default_term, "React");
        assert_eq!(config.source.delay, "2s");
    }

    #[test]
    fn default_delay_parses_to_two_seconds() {
        let config = Config::default();
        let delay = config.source.delay().expect("delay parse failed");

        assert_eq!(delay, Duration::from_secs(2));
    }

    #[test]
    fn omitted_search_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            state_db_path = "other.db"

            [search]

            [source]
            delay = "50ms"
            "#,
        )
        .expect("deserialization failed");

        assert_eq!(config.search.key, "search");
        assert_eq!(config.search.default_term, "React");
        assert_eq!(
            config.source.delay().expect("delay parse failed"),
            Duration::from_millis(50)
        );
    }
}
