use log::warn;
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://prova.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Runtime settings, read from the process environment (and `.env` via dotenv).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset or empty keys keep
    /// their defaults; unparsable numbers are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: get("DATABASE_MAX_CONNECTIONS")
                .and_then(|raw| parse_or_warn("DATABASE_MAX_CONNECTIONS", &raw))
                .filter(|max| *max > 0)
                .unwrap_or(defaults.max_connections),
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|raw| parse_or_warn("PORT", &raw))
                .unwrap_or(defaults.port),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid {} value {:?}, using default", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_local_sqlite_file() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.database_url, "sqlite://prova.db");
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8080));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "1"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
        ]);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 9000));
    }

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("DATABASE_MAX_CONNECTIONS", "0"),
            ("PORT", "eighty"),
            ("DATABASE_URL", "   "),
        ]);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite://prova.db");
    }
}
