use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
const DEFAULT_LOAD_DELAY_MS: u64 = 120;
const DEFAULT_SAVE_DELAY_MS: u64 = 1_000;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }

    pub fn log_level(self) -> tracing::Level {
        match self {
            Self::Dev => tracing::Level::DEBUG,
            Self::Prod => tracing::Level::INFO,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
    pub profile: AppProfile,
    pub load_delay: Duration,
    pub save_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            profile: AppProfile::Dev,
            load_delay: Duration::from_millis(DEFAULT_LOAD_DELAY_MS),
            save_delay: Duration::from_millis(DEFAULT_SAVE_DELAY_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        Self::from_lookup(read_env)
    }

    /// Builds a config from an arbitrary key lookup. Unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("OPPORTUNITY_API_BASE_URL") {
            config.api_base_url = normalize_base_url(&url);
        }

        if let Some(key) = lookup("OPPORTUNITY_TOKEN_STORAGE_KEY") {
            let key = key.trim();
            if !key.is_empty() {
                config.token_storage_key = key.to_string();
            }
        }

        config.profile = AppProfile::from_env(lookup("OPPORTUNITY_PROFILE"));

        if let Some(ms) =
            lookup("OPPORTUNITY_LOAD_DELAY_MS").and_then(|value| value.parse::<u64>().ok())
        {
            config.load_delay = Duration::from_millis(ms);
        }

        if let Some(ms) =
            lookup("OPPORTUNITY_SAVE_DELAY_MS").and_then(|value| value.parse::<u64>().ok())
        {
            config.save_delay = Duration::from_millis(ms);
        }

        config
    }
}

pub(crate) fn normalize_base_url(input: &str) -> String {
    input.trim().trim_end_matches('/').to_string()
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "OPPORTUNITY_API_BASE_URL" => option_env!("OPPORTUNITY_API_BASE_URL"),
        "OPPORTUNITY_TOKEN_STORAGE_KEY" => option_env!("OPPORTUNITY_TOKEN_STORAGE_KEY"),
        "OPPORTUNITY_PROFILE" => option_env!("OPPORTUNITY_PROFILE"),
        "OPPORTUNITY_LOAD_DELAY_MS" => option_env!("OPPORTUNITY_LOAD_DELAY_MS"),
        "OPPORTUNITY_SAVE_DELAY_MS" => option_env!("OPPORTUNITY_SAVE_DELAY_MS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.token_storage_key, "token");
        assert_eq!(config.profile, AppProfile::Dev);
        assert_eq!(config.save_delay, Duration::from_millis(1_000));
        assert_eq!(config.load_delay, Duration::from_millis(120));
    }

    #[test]
    fn base_url_loses_trailing_slashes() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("OPPORTUNITY_API_BASE_URL", " https://crm.local/api// ")]));
        assert_eq!(config.api_base_url, "https://crm.local/api");
    }

    #[test]
    fn unparseable_delays_keep_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OPPORTUNITY_SAVE_DELAY_MS", "soon"),
            ("OPPORTUNITY_LOAD_DELAY_MS", "0"),
        ]));
        assert_eq!(config.save_delay, Duration::from_millis(1_000));
        assert_eq!(config.load_delay, Duration::ZERO);
    }

    #[test]
    fn blank_storage_key_is_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[("OPPORTUNITY_TOKEN_STORAGE_KEY", "  ")]));
        assert_eq!(config.token_storage_key, "token");
    }

    #[test]
    fn profile_parsing() {
        assert_eq!(AppProfile::from_env(Some("production".into())), AppProfile::Prod);
        assert_eq!(AppProfile::from_env(Some("prod".into())), AppProfile::Prod);
        assert_eq!(AppProfile::from_env(Some("staging".into())), AppProfile::Dev);
        assert_eq!(AppProfile::from_env(None), AppProfile::Dev);
        assert_eq!(AppProfile::Prod.log_level(), tracing::Level::INFO);
    }
}
