//! Server Configuration
//!
//! Defaults overridden by environment variables (`.env` is loaded first).

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::{AuthConfig, SessionSecret};
use blog::BlogConfig;
use kernel::page::DEFAULT_PAGE_SIZE;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_SESSION_TTL_SECS: u64 = 86400;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Process-wide configuration, built once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub blog: BlogConfig,
}

impl AppConfig {
    /// Read from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Build from an arbitrary variable source
    ///
    /// Without `SESSION_SECRET`, development builds fall back to a random
    /// secret; release builds refuse to start.
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let db_max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let session_secret = match lookup("SESSION_SECRET") {
            Some(secret) => SessionSecret::new(secret).context("SESSION_SECRET is invalid")?,
            None if development => {
                tracing::warn!("SESSION_SECRET not set, using a random development secret");
                SessionSecret::random()
            }
            None => bail!("SESSION_SECRET must be set in production"),
        };

        let session_ttl_secs = parse_or(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;
        if session_ttl_secs == 0 {
            bail!("SESSION_TTL_SECS must be positive");
        }

        let page_size = parse_or(&lookup, "PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            bail!("PAGE_SIZE must be positive");
        }

        let mut auth = AuthConfig::new(session_secret);
        auth.session_ttl = Duration::from_secs(session_ttl_secs);
        auth.cookie_secure = parse_or(&lookup, "COOKIE_SECURE", false)?;
        auth.page_size = page_size;

        Ok(Self {
            database_url,
            db_max_connections,
            bind_addr,
            frontend_origins,
            auth,
            blog: BlogConfig { page_size },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value")),
        None => Ok(default),
    }
}
