/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, JWT_SECRET, CORS 許可など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub database_url: String,
    pub database_max_connections: u32,

    // HS256 shared secret; read once here and handed to TokenService
    pub jwt_secret: String,
    pub access_token_ttl_seconds: i64,
    pub access_token_leeway_seconds: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print the database url (may embed a password) or the jwt secret
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("database_max_connections", &self.database_max_connections)
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("access_token_leeway_seconds", &self.access_token_leeway_seconds)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins =
            parse_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let database_max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }

        let access_token_ttl_seconds =
            parse_ttl(std::env::var("ACCESS_TOKEN_TTL_SECONDS").ok().as_deref())?;

        let access_token_leeway_seconds = std::env::var("ACCESS_TOKEN_LEEWAY_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            database_url,
            database_max_connections,
            jwt_secret,
            access_token_ttl_seconds,
            access_token_leeway_seconds,
        })
    }
}

const DEFAULT_ACCESS_TOKEN_TTL_SECONDS: i64 = 8 * 60 * 60;

// Unset -> 8h. Set but not a positive i64 -> startup error (no silent fallback).
fn parse_ttl(raw: Option<&str>) -> Result<i64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_ACCESS_TOKEN_TTL_SECONDS);
    };

    match raw.trim().parse::<i64>() {
        Ok(ttl) if ttl > 0 => Ok(ttl),
        _ => Err(ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS")),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_env_accepts_short_and_mixed_case_production() {
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("PROD"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
        assert_eq!(AppEnv::parse(""), AppEnv::Development);
    }

    #[test]
    fn ttl_defaults_to_eight_hours() {
        assert_eq!(parse_ttl(None).unwrap(), 8 * 60 * 60);
        assert_eq!(parse_ttl(Some("600")).unwrap(), 600);
    }

    #[test]
    fn ttl_outside_positive_i64_range_is_rejected() {
        for raw in ["0", "-5", "abc", "9223372036854775808", "18446744073709551615"] {
            assert!(
                matches!(
                    parse_ttl(Some(raw)),
                    Err(ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS"))
                ),
                "ttl {raw:?}"
            );
        }
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" https://a.example , ,https://b.example,"),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(parse_origins("").is_empty());
    }
}
