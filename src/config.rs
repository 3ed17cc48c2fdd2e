//! Site configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! `SiteConfig::from_env` reads the process environment once at startup.
//! Each value is parsed by a pure helper over `Option<&str>` so defaults and
//! validation can be tested without touching the real environment.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_NEWS_PAGE_SIZE: usize = 9;
pub const DEFAULT_LIVE_TICK_MS: u64 = 3000;
pub const MIN_LIVE_TICK_MS: u64 = 100;
pub const DEFAULT_SITE_NAME: &str = "Kabaddi League";

/// Errors raised while loading configuration. These are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required env var {var}")]
    Missing { var: String },

    /// An environment variable is set but its value is unusable.
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

impl ConfigError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "E_CONFIG_MISSING",
            Self::Invalid { .. } => "E_CONFIG_INVALID",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub api_base_url: String,
    pub port: u16,
    pub timeouts: ApiTimeouts,
    pub news_page_size: usize,
    pub live_tick_ms: u64,
    pub site_name: String,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Required:
    /// - `LEAGUE_API_BASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LEAGUE_API_REQUEST_TIMEOUT_SECS`: default 15
    /// - `LEAGUE_API_CONNECT_TIMEOUT_SECS`: default 5
    /// - `NEWS_PAGE_SIZE`: default 9
    /// - `LIVE_TICK_MS`: default 3000
    /// - `SITE_NAME`: default "Kabaddi League"
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the base URL is absent or any value fails
    /// to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |key: &str| std::env::var(key).ok();

        Ok(Self {
            api_base_url: parse_base_url(var("LEAGUE_API_BASE_URL").as_deref())?,
            port: parse_or("PORT", var("PORT").as_deref(), DEFAULT_PORT)?,
            timeouts: ApiTimeouts {
                request_secs: parse_or(
                    "LEAGUE_API_REQUEST_TIMEOUT_SECS",
                    var("LEAGUE_API_REQUEST_TIMEOUT_SECS").as_deref(),
                    DEFAULT_REQUEST_TIMEOUT_SECS,
                )?,
                connect_secs: parse_or(
                    "LEAGUE_API_CONNECT_TIMEOUT_SECS",
                    var("LEAGUE_API_CONNECT_TIMEOUT_SECS").as_deref(),
                    DEFAULT_CONNECT_TIMEOUT_SECS,
                )?,
            },
            news_page_size: parse_page_size(var("NEWS_PAGE_SIZE").as_deref())?,
            live_tick_ms: parse_tick_ms(var("LIVE_TICK_MS").as_deref())?,
            site_name: var("SITE_NAME")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned()),
        })
    }

    /// Config pointing at `api_base_url` with every other value defaulted.
    #[must_use]
    pub fn with_base_url(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
            port: DEFAULT_PORT,
            timeouts: ApiTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            news_page_size: DEFAULT_NEWS_PAGE_SIZE,
            live_tick_ms: DEFAULT_LIVE_TICK_MS,
            site_name: DEFAULT_SITE_NAME.to_owned(),
        }
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::Missing { var: "LEAGUE_API_BASE_URL".into() })?;

    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            var: "LEAGUE_API_BASE_URL".into(),
            reason: format!("expected an http(s) URL, got '{raw}'"),
        });
    }

    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_or<T: std::str::FromStr>(var: &str, raw: Option<&str>, default: T) -> Result<T, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid {
            var: var.to_owned(),
            reason: format!("cannot parse '{value}'"),
        }),
    }
}

fn parse_page_size(raw: Option<&str>) -> Result<usize, ConfigError> {
    let size = parse_or("NEWS_PAGE_SIZE", raw, DEFAULT_NEWS_PAGE_SIZE)?;
    if size == 0 {
        return Err(ConfigError::Invalid { var: "NEWS_PAGE_SIZE".into(), reason: "must be at least 1".into() });
    }
    Ok(size)
}

fn parse_tick_ms(raw: Option<&str>) -> Result<u64, ConfigError> {
    let ms = parse_or("LIVE_TICK_MS", raw, DEFAULT_LIVE_TICK_MS)?;
    if ms < MIN_LIVE_TICK_MS {
        return Err(ConfigError::Invalid {
            var: "LIVE_TICK_MS".into(),
            reason: format!("must be at least {MIN_LIVE_TICK_MS}"),
        });
    }
    Ok(ms)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
