use std::fmt;
use std::net::SocketAddr;

use chrono::Duration;
use thiserror::Error;

const DEFAULT_DB_HOST: &str = "127.0.0.1";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "bank";
const DEFAULT_JWT_TTL_MINUTES: i64 = 10;
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const REDACTED: &str = "<redacted>";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Process-wide settings, read once at startup and handed to constructors.
#[derive(Clone)]
pub struct Config {
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub jwt_secret: String,
    pub jwt_ttl: Duration,
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn init() -> Result<Config, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key).ok_or(ConfigError::Missing(key))
        };

        let db_user = required("DBUSER")?;
        let db_password = required("DBPASS")?;
        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must not be empty".to_string(),
            });
        }

        let db_port = match lookup("DBPORT") {
            Some(raw) => parse_value("DBPORT", &raw)?,
            None => DEFAULT_DB_PORT,
        };
        let ttl_minutes: i64 = match lookup("JWT_TTL_MINUTES") {
            Some(raw) => parse_value("JWT_TTL_MINUTES", &raw)?,
            None => DEFAULT_JWT_TTL_MINUTES,
        };
        if ttl_minutes <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_TTL_MINUTES",
                reason: "must be positive".to_string(),
            });
        }
        let listen_addr = parse_value(
            "LISTEN_ADDR",
            &lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
        )?;

        Ok(Config {
            db_user,
            db_password,
            db_host: lookup("DBHOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            db_port,
            db_name: lookup("DBNAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            jwt_secret,
            jwt_ttl: Duration::minutes(ttl_minutes),
            listen_addr,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_user", &self.db_user)
            .field("db_password", &REDACTED)
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_name", &self.db_name)
            .field("jwt_secret", &REDACTED)
            .field("jwt_ttl", &self.jwt_ttl)
            .field("listen_addr", &self.listen_addr)
            .finish()
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("DBUSER", "bank"),
            ("DBPASS", "hunter2"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.db_host, "127.0.0.1");
        assert_eq!(config.db_port, 5432);
        assert_eq!(config.db_name, "bank");
        assert_eq!(config.jwt_ttl, Duration::minutes(10));
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DBUSER", "bank"),
            ("DBPASS", "hunter2"),
            ("DBHOST", "db.internal"),
            ("DBPORT", "6543"),
            ("DBNAME", "ledger"),
            ("JWT_SECRET", "s3cret"),
            ("JWT_TTL_MINUTES", "3"),
            ("LISTEN_ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();

        assert_eq!(config.db_host, "db.internal");
        assert_eq!(config.db_port, 6543);
        assert_eq!(config.db_name, "ledger");
        assert_eq!(config.jwt_ttl, Duration::minutes(3));
        assert_eq!(config.listen_addr.port(), 9000);
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[("DBUSER", "bank"), ("DBPASS", "pw")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("DBUSER", "bank"),
            ("DBPASS", "pw"),
            ("JWT_SECRET", ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JWT_SECRET", .. }));
    }

    #[test]
    fn test_missing_db_credentials() {
        let err = Config::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DBUSER"));

        let err = Config::from_lookup(lookup_from(&[("DBUSER", "bank"), ("JWT_SECRET", "s")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("DBPASS"));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = Config::from_lookup(lookup_from(&[
            ("DBUSER", "bank"),
            ("DBPASS", "hunter2"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();

        let printed = format!("{:?}", config);
        assert!(printed.contains("bank"));
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("hunter2"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn test_bad_port() {
        let err = Config::from_lookup(lookup_from(&[
            ("DBUSER", "bank"),
            ("DBPASS", "pw"),
            ("JWT_SECRET", "s3cret"),
            ("DBPORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DBPORT", .. }));
    }
}
