/// Configuration management for Post Service
///
/// Everything is read once at startup. Required values that are missing make
/// startup fail with a message naming the variable.
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_JWT_SECRET_BYTES: usize = 32;
const MAX_JWT_TTL_SECS: i64 = 10 * 365 * 24 * 3600;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("failed to parse {key}='{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("{0}")]
    Rejected(String),
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub media: MediaConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or `*`
    pub allowed_origins: String,
}

impl CorsConfig {
    pub fn origins(&self) -> Vec<&str> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn allows_any(&self) -> bool {
        self.allowed_origins.trim() == "*"
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime
    pub ttl_secs: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

/// Media host (S3-compatible bucket) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    pub bucket: String,
    pub region: String,
    /// Public base URL objects are served from
    pub base_url: String,
    /// Key prefix every upload lands under
    pub folder: String,
    pub max_upload_bytes: usize,
}

impl MediaConfig {
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let app = AppConfig {
            env: app_env,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or_default(&lookup, "PORT", 5000)?,
        };

        let cors = {
            let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
                Some(value) => value,
                None if app.is_production() => {
                    return Err(ConfigError::Missing("CORS_ALLOWED_ORIGINS"))
                }
                None => "*".to_string(),
            };

            if app.is_production() && allowed_origins.trim() == "*" {
                return Err(ConfigError::Rejected(
                    "CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string(),
                ));
            }

            CorsConfig { allowed_origins }
        };

        let database = DatabaseConfig {
            url: required(&lookup, "DATABASE_URL")?,
            max_connections: parse_or_default(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
        };

        let jwt = {
            let secret = required(&lookup, "JWT_SECRET")?;
            if secret.len() < MIN_JWT_SECRET_BYTES {
                return Err(ConfigError::Rejected(format!(
                    "JWT_SECRET must be at least {} bytes",
                    MIN_JWT_SECRET_BYTES
                )));
            }
            let ttl_secs = parse_or_default(&lookup, "JWT_TTL_SECS", 7 * 24 * 3600)?;
            if !(1..=MAX_JWT_TTL_SECS).contains(&ttl_secs) {
                return Err(ConfigError::Rejected(format!(
                    "JWT_TTL_SECS must be between 1 and {}",
                    MAX_JWT_TTL_SECS
                )));
            }
            JwtConfig { secret, ttl_secs }
        };

        let media = {
            let bucket = required(&lookup, "MEDIA_BUCKET")?;
            let base_url = lookup("MEDIA_BASE_URL")
                .unwrap_or_else(|| format!("https://{}.s3.amazonaws.com", bucket));
            MediaConfig {
                region: lookup("MEDIA_REGION").unwrap_or_else(|| "us-east-1".to_string()),
                folder: lookup("MEDIA_FOLDER").unwrap_or_else(|| "snapgram_posts".to_string()),
                max_upload_bytes: parse_or_default(
                    &lookup,
                    "MEDIA_MAX_UPLOAD_BYTES",
                    10 * 1024 * 1024,
                )?,
                bucket,
                base_url,
            }
        };

        Ok(Config {
            app,
            cors,
            database,
            jwt,
            media,
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse_or_default<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
