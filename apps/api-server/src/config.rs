//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use actix_web::http::header::HeaderName;
use actix_web::http::{Method, Uri};
use geoblog_infra::database::DatabaseConfig;
use thiserror::Error;

/// Configuration errors. Any of these stops the server from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

/// Cross-origin allow-list. `None` means any value is accepted.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
    pub allowed_methods: Vec<Method>,
    pub allowed_headers: Option<Vec<HeaderName>>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse(&lookup, "PORT")?.ok_or(ConfigError::Missing("PORT"))?;

        let database = DatabaseConfig {
            url,
            max_connections: parse(&lookup, "DB_MAX_CONNECTIONS")?.unwrap_or(10),
            min_connections: parse(&lookup, "DB_MIN_CONNECTIONS")?.unwrap_or(1),
            drop_existing: parse_bool(&lookup, "DB_DROP_EXISTING")?.unwrap_or(false),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            database,
            cors: CorsConfig::from_lookup(&lookup)?,
        })
    }
}

impl CorsConfig {
    /// Format: comma-separated lists, `*` for "any" (origins and headers only).
    /// Example: CORS_ALLOWED_ORIGINS=https://app.example.com,http://localhost:5173
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins = match list(lookup, "CORS_ALLOWED_ORIGINS") {
            None => None,
            Some(origins) => origins
                .into_iter()
                .map(|origin| {
                    origin
                        .parse::<Uri>()
                        .map(|_| origin.clone())
                        .map_err(|_| invalid("CORS_ALLOWED_ORIGINS", &origin))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some)?,
        };

        let allowed_methods = match lookup("CORS_ALLOWED_METHODS") {
            None => vec![Method::GET, Method::POST],
            Some(raw) => split(&raw)
                .into_iter()
                .map(|method| {
                    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
                        .map_err(|_| invalid("CORS_ALLOWED_METHODS", &method))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        let allowed_headers = match lookup("CORS_ALLOWED_HEADERS") {
            None => Some(vec![actix_web::http::header::CONTENT_TYPE]),
            Some(_) => match list(lookup, "CORS_ALLOWED_HEADERS") {
                None => None,
                Some(headers) => Some(
                    headers
                        .into_iter()
                        .map(|header| {
                            HeaderName::from_bytes(header.as_bytes())
                                .map_err(|_| invalid("CORS_ALLOWED_HEADERS", &header))
                        })
                        .collect::<Result<Vec<_>, _>>()?,
                ),
            },
        };

        Ok(Self {
            allowed_origins,
            allowed_methods,
            allowed_headers,
        })
    }
}

fn invalid(var: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
    }
}

fn parse<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(var)
        .map(|raw| raw.trim().parse().map_err(|_| invalid(var, &raw)))
        .transpose()
}

fn parse_bool<F>(lookup: &F, var: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(invalid(var, &raw)),
        })
        .transpose()
}

fn split(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Comma-separated list where an unset variable or a `*` entry means "any".
fn list<F>(lookup: &F, var: &'static str) -> Option<Vec<String>>
where
    F: Fn(&str) -> Option<String>,
{
    let items = split(&lookup(var)?);
    if items.iter().any(|item| item == "*") {
        None
    } else {
        Some(items)
    }
}
