use crate::constants::DEFAULT_API_BASE;

const API_URL_ENV: &str = "RUNPAD_API_URL";

/// Deployment-time knobs. Only the execution service base URL for now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
}

impl Config {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(base) if !base.trim().is_empty() => Self::new(&base),
            _ => Self::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
