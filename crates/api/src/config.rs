use std::str::FromStr;

use axum::http::HeaderValue;

/// Errors raised while loading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// Empty means no cross-origin access.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Refuse to create a dog whose id is already taken (default: `true`).
    pub reject_duplicate_ids: bool,
    /// Start with the built-in seed records (default: `true`).
    pub seed_dogs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
            reject_duplicate_ids: true,
            seed_dogs: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `127.0.0.1` |
    /// | `PORT`                 | `8080`      |
    /// | `CORS_ORIGINS`         | (none)      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    /// | `REJECT_DUPLICATE_IDS` | `true`      |
    /// | `SEED_DOGS`            | `true`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => defaults.cors_origins,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            cors_origins,
            request_timeout_secs: parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            reject_duplicate_ids: parse_var(
                &lookup,
                "REJECT_DUPLICATE_IDS",
                defaults.reject_duplicate_ids,
            )?,
            seed_dogs: parse_var(&lookup, "SEED_DOGS", defaults.seed_dogs)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            origin.parse().map_err(|e: axum::http::header::InvalidHeaderValue| {
                ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.reject_duplicate_ids);
        assert!(config.seed_dogs);
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("REJECT_DUPLICATE_IDS", "false"),
            ("SEED_DOGS", "false"),
        ])
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .map(|o| o.to_str().unwrap())
            .collect();
        assert_eq!(origins, ["http://a.test", "http://b.test"]);
        assert_eq!(config.request_timeout_secs, 5);
        assert!(!config.reject_duplicate_ids);
        assert!(!config.seed_dogs);
    }

    #[test]
    fn invalid_port_names_the_variable() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "PORT", .. });
    }

    #[test]
    fn invalid_flag_is_rejected() {
        let err = load(&[("SEED_DOGS", "maybe")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "SEED_DOGS", .. });
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let err = load(&[("CORS_ORIGINS", "http://ok.test,bad\norigin")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "CORS_ORIGINS", .. });
    }
}
