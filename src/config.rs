use std::{
    env,
    net::{IpAddr, Ipv4Addr},
};

use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Every setting is
    /// validated here so the process never starts listening with a bad config.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = required(&lookup, "PORT")?;
        let port = port.trim().parse::<u16>().map_err(|err| ConfigError::Invalid {
            name: "PORT",
            value: port.clone(),
            reason: err.to_string(),
        })?;

        let database_url = required(&lookup, "DATABASE_URL")?.trim().to_string();

        let host = match lookup("HOST").filter(|h| !h.trim().is_empty()) {
            Some(host) => host.trim().parse::<IpAddr>().map_err(|err| ConfigError::Invalid {
                name: "HOST",
                value: host.clone(),
                reason: err.to_string(),
            })?,
            None => DEFAULT_HOST,
        };

        let db_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        name: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                        reason: "must be greater than zero".into(),
                    });
                }
                Err(err) => {
                    return Err(ConfigError::Invalid {
                        name: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                        reason: err.to_string(),
                    });
                }
            },
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            port,
            database_url,
            host,
            db_max_connections,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn loads_required_settings_with_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "4000"),
            ("DATABASE_URL", "postgres://localhost/orders"),
        ]))
        .unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(config.database_url, "postgres://localhost/orders");
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.db_max_connections, 10);
    }

    #[test]
    fn missing_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost/orders",
        )]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("PORT"));
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "http"),
            ("DATABASE_URL", "postgres://localhost/orders"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn blank_database_url_counts_as_missing() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "4000"), ("DATABASE_URL", "  ")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn optional_settings_are_validated() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "4000"),
            ("DATABASE_URL", "postgres://localhost/orders"),
            ("HOST", "127.0.0.1"),
            ("DATABASE_MAX_CONNECTIONS", "25"),
        ]))
        .unwrap();
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.db_max_connections, 25);

        let err = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "4000"),
            ("DATABASE_URL", "postgres://localhost/orders"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                ..
            }
        ));
    }
}
