/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables.
 *
 * # Configuration Sources
 *
 * | Variable         | Default                    |
 * |------------------|----------------------------|
 * | `PORT`           | `8000`                     |
 * | `DATABASE_URL`   | `sqlite::memory:`          |
 * | `JWT_SECRET_KEY` | `THIS_IS_A_JWT_SECRET_KEY` |
 * | `CORS_ORIGIN`    | `http://localhost:3000`    |
 * | `BCRYPT_COST`    | `10`                       |
 *
 * `.env` files are read by the binary before this runs.
 *
 * # Error Handling
 *
 * Missing variables fall back to their defaults. Values that do not parse
 * are logged and replaced by the default as well, so loading never fails.
 */
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_JWT_SECRET: &str = "THIS_IS_A_JWT_SECRET_KEY";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port the HTTP server binds on all interfaces
    pub port: u16,
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// Origin allowed by CORS
    pub cors_origin: String,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let jwt_secret = match lookup("JWT_SECRET_KEY") {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET_KEY not set. Using the built-in development secret.");
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        Self {
            port: parse_or_default(&lookup, "PORT", DEFAULT_PORT),
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            bcrypt_cost: parse_or_default(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST),
        }
    }
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Invalid {} value {:?}, using default {}", key, raw, default);
                default
            }
        },
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    pub fn cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.config.cors_origin = origin.into();
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ServerConfig {
        self.config
    }
}
