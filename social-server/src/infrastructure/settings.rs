use anyhow::{Context, Result, anyhow};

use super::logging::LogFormat;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub database_max_connections: u32,
    pub http_addr: String,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub log_format: LogFormat,
    pub http_request_body_limit_bytes: usize,
    pub http_concurrency_limit: usize,
    pub http_request_timeout_secs: u64,
    pub comment_thread_max_depth: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = var("DATABASE_URL", "sqlite://social.db");
        if database_url.trim().is_empty() {
            return Err(anyhow!("DATABASE_URL must not be empty"));
        }
        let database_max_connections = parse_positive(&lookup, "DATABASE_MAX_CONNECTIONS", 5u32)?;

        let http_addr = var("HTTP_ADDR", "0.0.0.0:8080");
        let cors_origins = parse_cors_origins(&var(
            "CORS_ORIGINS",
            "http://localhost:5173,http://127.0.0.1:5173",
        ));
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let log_format = LogFormat::parse(&var("LOG_FORMAT", "compact"))?;

        let http_request_body_limit_bytes =
            parse_positive(&lookup, "HTTP_REQUEST_BODY_LIMIT_BYTES", 1024 * 1024usize)?;
        let http_concurrency_limit = parse_positive(&lookup, "HTTP_CONCURRENCY_LIMIT", 256usize)?;
        let http_request_timeout_secs =
            parse_positive(&lookup, "HTTP_REQUEST_TIMEOUT_SECS", 10u64)?;
        let comment_thread_max_depth =
            parse_positive(&lookup, "COMMENT_THREAD_MAX_DEPTH", 16usize)?;

        Ok(Self {
            database_url: database_url.trim().to_string(),
            database_max_connections,
            http_addr,
            cors_origins,
            log_level,
            log_format,
            http_request_body_limit_bytes,
            http_concurrency_limit,
            http_request_timeout_secs,
            comment_thread_max_depth,
        })
    }
}

fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_positive<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<T>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::Settings;
    use crate::infrastructure::logging::LogFormat;

    fn settings_from(pairs: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_are_applied() {
        let settings = settings_from(&[]).expect("defaults must be valid");
        assert_eq!(settings.database_url, "sqlite://social.db");
        assert_eq!(settings.http_addr, "0.0.0.0:8080");
        assert_eq!(settings.log_format, LogFormat::Compact);
        assert_eq!(settings.comment_thread_max_depth, 16);
        assert_eq!(settings.cors_origins.len(), 2);
    }

    #[test]
    fn zero_limits_are_rejected() {
        assert!(settings_from(&[("HTTP_CONCURRENCY_LIMIT", "0")]).is_err());
        assert!(settings_from(&[("DATABASE_MAX_CONNECTIONS", "abc")]).is_err());
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let settings = settings_from(&[("CORS_ORIGINS", " https://a.example , ,https://b.example")])
            .expect("valid");
        assert_eq!(
            settings.cors_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn log_level_falls_back_to_rust_log() {
        let settings = settings_from(&[("RUST_LOG", "debug")]).expect("valid");
        assert_eq!(settings.log_level, "debug");
    }
}
