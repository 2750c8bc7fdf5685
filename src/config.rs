//! Client configuration read once from the environment.

use std::env;

/// Default OpenRouter API base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

const DEFAULT_REFERER: &str = "http://localhost:8080";
const DEFAULT_TITLE: &str = "orq";

/// Connection settings for the completion endpoint.
///
/// Built once at startup and never mutated. The credential is only ever
/// read from the environment; it is never embedded in source or logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bearer credential for the completion service.
    pub api_key: String,
    /// Base URL, without a trailing slash.
    pub base_url: String,
    /// Value sent as the `HTTP-Referer` header.
    pub referer: String,
    /// Value sent as the `X-Title` header.
    pub title: String,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// `OPENROUTER_API_KEY` is required and must be non-empty.
    /// `OPENROUTER_BASE_URL`, `ORQ_REFERER`, and `ORQ_TITLE` override the
    /// defaults when set.
    ///
    /// # Errors
    ///
    /// Returns an error string when the credential is missing or empty.
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                "OPENROUTER_API_KEY is not set; export it or add it to a .env file".to_string()
            })?;

        let base_url = env::var("OPENROUTER_BASE_URL")
            .map_or_else(|_| DEFAULT_BASE_URL.to_string(), |url| url.trim_end_matches('/').to_string());
        let referer = env::var("ORQ_REFERER").unwrap_or_else(|_| DEFAULT_REFERER.to_string());
        let title = env::var("ORQ_TITLE").unwrap_or_else(|_| DEFAULT_TITLE.to_string());

        Ok(Self { api_key, base_url, referer, title })
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_BASE_URL};
    use std::env;
    use std::sync::Mutex;

    // Process environment is shared across test threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env(vars: &[(&str, Option<&str>)], check: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap();
        let saved: Vec<(String, Option<String>)> =
            vars.iter().map(|(name, _)| ((*name).to_string(), env::var(name).ok())).collect();
        for (name, value) in vars {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
        check();
        for (name, value) in saved {
            match value {
                Some(value) => env::set_var(&name, value),
                None => env::remove_var(&name),
            }
        }
    }

    #[test]
    fn missing_credential_is_an_error() {
        with_env(&[("OPENROUTER_API_KEY", None)], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.contains("OPENROUTER_API_KEY"));
        });
    }

    #[test]
    fn empty_credential_is_an_error() {
        with_env(&[("OPENROUTER_API_KEY", Some("  "))], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn defaults_apply_when_only_credential_is_set() {
        with_env(
            &[
                ("OPENROUTER_API_KEY", Some("sk-test")),
                ("OPENROUTER_BASE_URL", None),
                ("ORQ_REFERER", None),
                ("ORQ_TITLE", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.api_key, "sk-test");
                assert_eq!(config.base_url, DEFAULT_BASE_URL);
                assert_eq!(config.referer, "http://localhost:8080");
                assert_eq!(config.title, "orq");
            },
        );
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        with_env(
            &[
                ("OPENROUTER_API_KEY", Some("sk-test")),
                ("OPENROUTER_BASE_URL", Some("http://127.0.0.1:9999/api/")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.base_url, "http://127.0.0.1:9999/api");
            },
        );
    }

    #[test]
    fn construction_is_idempotent() {
        with_env(
            &[
                ("OPENROUTER_API_KEY", Some("sk-test")),
                ("OPENROUTER_BASE_URL", None),
                ("ORQ_REFERER", None),
                ("ORQ_TITLE", None),
            ],
            || {
                let first = Config::from_env().unwrap();
                let second = Config::from_env().unwrap();
                assert_eq!(first, second);
            },
        );
    }
}
