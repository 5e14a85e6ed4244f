use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://rage4.com/rapi";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = var("RAGE4_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(
                var("RAGE4_TIMEOUT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

pub(crate) mod mock {
    use super::*;

    impl Default for Config {
        fn default() -> Self {
            Config {
                api_url: String::from("http://127.0.0.1:8080/rapi"),
                timeout: Duration::from_secs(5),
            }
        }
    }
}
