use std::env;

use db::database_url_from;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Origin allowed by CORS, none when unset.
    pub client_host: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        Config {
            database_url: database_url_from(var("DATABASE_URL")),
            bind_address: non_empty("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into()),
            client_host: non_empty("CLIENT_HOST"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Config, DEFAULT_BIND_ADDRESS};
    use db::DEFAULT_DATABASE_URL;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.client_host, None);
    }

    #[test]
    fn test_reads_values() {
        let config = config_from(&[
            ("DATABASE_URL", ":memory:"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("CLIENT_HOST", "http://localhost:3000"),
        ]);

        assert_eq!(config.database_url, ":memory:");
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.client_host, Some("http://localhost:3000".to_string()));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = config_from(&[("DATABASE_URL", " "), ("CLIENT_HOST", "")]);

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.client_host, None);
    }
}
