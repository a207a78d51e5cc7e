//! Configuration for connecting to a Visoma service.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure all required values are present before any
//! request is made.

use std::env;

use url::Url;

use crate::error::VisomaError;

/// Environment variable naming the Visoma host.
pub const ENV_HOST: &str = "VISOMA_HOST";
/// Environment variable naming the Visoma login user.
pub const ENV_USER: &str = "VISOMA_USER";
/// Environment variable naming the Visoma login password.
pub const ENV_PASSWORD: &str = "VISOMA_PASSWORD";

/// Configuration for connecting to a Visoma service.
///
/// All three values are required. The password is held only in memory and
/// is sent as a request header; it is never logged by this crate.
#[derive(Clone)]
pub struct Config {
    /// Fully-qualified domain name of the Visoma service
    /// (e.g. `visoma.example.com`). A value carrying an explicit
    /// `http://`/`https://` scheme is used as-is, which is how the test
    /// suite points the client at a local mock server.
    pub host: String,

    /// User name for the Visoma login.
    pub user: String,

    /// Password for the Visoma login.
    /// This value must never be logged or included in error messages.
    pub password: String,
}

impl Config {
    /// Creates a configuration from explicit values, validating the host.
    ///
    /// # Errors
    ///
    /// Returns `VisomaError::Config` if the host does not form a valid
    /// base URL.
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, VisomaError> {
        let config = Config {
            host: host.into().trim().to_string(),
            user: user.into(),
            password: password.into(),
        };

        Url::parse(&config.base_url()).map_err(|e| {
            VisomaError::invalid_config(format!("{ENV_HOST} does not form a valid URL: {e}"))
        })?;

        Ok(config)
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `VISOMA_HOST`: Fully-qualified domain name of the Visoma service
    /// - `VISOMA_USER`: The user name for the Visoma login
    /// - `VISOMA_PASSWORD`: The user's password for the Visoma login
    ///
    /// # Errors
    ///
    /// Returns `VisomaError::Config` naming every variable that is missing
    /// or empty, or if the host fails validation.
    pub fn from_env() -> Result<Self, VisomaError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through an injected lookup so tests never have
    /// to mutate process-wide environment state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, VisomaError> {
        let mut missing = Vec::new();
        let host = require(&lookup, ENV_HOST, &mut missing);
        let user = require(&lookup, ENV_USER, &mut missing);
        let password = require(&lookup, ENV_PASSWORD, &mut missing);

        if !missing.is_empty() {
            return Err(VisomaError::missing_env(&missing));
        }

        Self::new(host, user, password)
    }

    /// Returns the base URL requests are issued against.
    ///
    /// Plain host names are reached over HTTPS; an explicit scheme in the
    /// host value wins. Trailing slashes are trimmed for consistency.
    pub fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }
}

/// Fetches one required value, recording its name when missing or blank.
fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + '_ {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_from_lookup_reads_all_values() {
        let config = Config::from_lookup(env(&[
            (ENV_HOST, "visoma.example.com"),
            (ENV_USER, "user1"),
            (ENV_PASSWORD, "secret"),
        ]))
        .unwrap();
        assert_eq!(config.host, "visoma.example.com");
        assert_eq!(config.user, "user1");
        assert_eq!(config.password, "secret");
    }

    #[test]
    fn test_missing_values_are_all_listed() {
        let err = Config::from_lookup(env(&[(ENV_USER, "user1")])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("VISOMA_HOST"));
        assert!(msg.contains("VISOMA_PASSWORD"));
        assert!(!msg.contains("VISOMA_USER,"));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = Config::from_lookup(env(&[
            (ENV_HOST, ""),
            (ENV_USER, "user1"),
            (ENV_PASSWORD, "secret"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("VISOMA_HOST"));
    }

    #[test]
    fn test_base_url_prefixes_https() {
        let config = Config::new("visoma.example.com", "u", "p").unwrap();
        assert_eq!(config.base_url(), "https://visoma.example.com");
    }

    #[test]
    fn test_base_url_keeps_explicit_scheme() {
        let config = Config::new("http://127.0.0.1:9123", "u", "p").unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9123");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = Config::new("visoma.example.com/", "u", "p").unwrap();
        assert_eq!(config.base_url(), "https://visoma.example.com");
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        assert!(Config::new("not a host", "u", "p").is_err());
    }
}
