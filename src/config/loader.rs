//! Load settings from the process environment (after `.env`, if present).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

/// Read settings from the environment. Loads `.env` first when one exists.
pub fn from_env() -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();
    from_lookup(|key| std::env::var(key).ok())
}

/// Build settings from an arbitrary variable lookup. Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
    let backend = DatabaseBackend::from_url(&database_url)?;
    let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
    let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
    let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?;
    if max_connections == 0 {
        return Err(ConfigError::Invalid {
            var: "DB_MAX_CONNECTIONS",
            value: "0".into(),
        });
    }
    let body_limit_bytes = parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT_BYTES)?;

    Ok(Settings {
        database_url,
        backend,
        host,
        port,
        max_connections,
        body_limit_bytes,
    })
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
