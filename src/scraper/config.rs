// config.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Knobs for fetching a single offer page.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub user_agent: String,
    pub timeout: Duration,
    /// How long to wait after the site answers 429 before checking the status.
    pub throttle_pause: Duration,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(360),
            throttle_pause: Duration::from_secs(10),
        }
    }
}

impl ParserConfig {
    /// Defaults, overridden by `CIAN_USER_AGENT`, `CIAN_TIMEOUT_SECS`
    /// and `CIAN_THROTTLE_PAUSE_SECS` when they are set.
    pub fn from_env() -> Result<Self, ScraperError> {
        let mut config = Self::default();

        if let Ok(agent) = std::env::var("CIAN_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Some(secs) = secs_from_env("CIAN_TIMEOUT_SECS")? {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = secs_from_env("CIAN_THROTTLE_PAUSE_SECS")? {
            config.throttle_pause = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn build_client(&self) -> Result<Client, ScraperError> {
        Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))
    }
}

fn secs_from_env(name: &str) -> Result<Option<u64>, ScraperError> {
    match std::env::var(name) {
        Ok(raw) => parse_secs(name, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

pub(crate) fn parse_secs(name: &str, raw: &str) -> Result<u64, ScraperError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| ScraperError::Config(format!("{name}={raw:?} is not a number of seconds: {e}")))
}
