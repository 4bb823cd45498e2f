//! Application-level configuration loading: session lifetime, leaderboard
//! limits, and the admin token.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "ARCADE_BACK_CONFIG_PATH";
/// Environment variable carrying the token expected on admin routes.
const ADMIN_TOKEN_ENV: &str = "ARCADE_ADMIN_TOKEN";

const DEFAULT_SESSION_TTL_SECS: u64 = 3_600;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
const DEFAULT_TOP_LIMIT: usize = 10;
const MAX_TOP_LIMIT: usize = 100;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    session_ttl: Duration,
    sweep_interval: Duration,
    default_top_limit: usize,
    max_top_limit: usize,
    admin_token: Option<String>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in defaults, and pick up the admin token from the environment.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let mut config = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        config.admin_token = env::var(ADMIN_TOKEN_ENV).ok().filter(|t| !t.is_empty());
        if config.admin_token.is_none() {
            warn!("no admin token configured; admin routes will reject every request");
        }

        config
    }

    /// How long an idle session's game states are kept alive.
    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// How often the idle-session sweeper runs.
    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    /// Resolve a client-requested leaderboard limit: the default when
    /// omitted, capped at the configured maximum.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_top_limit)
            .min(self.max_top_limit)
    }

    /// Token expected in the `x-admin-token` header, when configured.
    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            default_top_limit: DEFAULT_TOP_LIMIT,
            max_top_limit: MAX_TOP_LIMIT,
            admin_token: None,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at
/// [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default = "default_session_ttl_secs")]
    session_ttl_secs: u64,
    #[serde(default = "default_sweep_interval_secs")]
    sweep_interval_secs: u64,
    #[serde(default = "default_top_limit")]
    default_top_limit: usize,
    #[serde(default = "default_max_top_limit")]
    max_top_limit: usize,
}

fn default_session_ttl_secs() -> u64 {
    DEFAULT_SESSION_TTL_SECS
}

fn default_sweep_interval_secs() -> u64 {
    DEFAULT_SWEEP_INTERVAL_SECS
}

fn default_top_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

fn default_max_top_limit() -> usize {
    MAX_TOP_LIMIT
}

impl From<RawConfig> for AppConfig {
    fn from(raw: RawConfig) -> Self {
        Self {
            session_ttl: Duration::from_secs(raw.session_ttl_secs),
            sweep_interval: Duration::from_secs(raw.sweep_interval_secs),
            default_top_limit: raw.default_top_limit,
            max_top_limit: raw.max_top_limit,
            admin_token: None,
        }
    }
}

fn resolve_config_path() -> PathBuf {
    env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_limit_defaults_and_caps() {
        let config = AppConfig::default();
        assert_eq!(config.effective_limit(None), DEFAULT_TOP_LIMIT);
        assert_eq!(config.effective_limit(Some(5)), 5);
        assert_eq!(config.effective_limit(Some(10_000)), MAX_TOP_LIMIT);
    }

    #[test]
    fn raw_config_fields_are_optional() {
        let config: AppConfig = serde_json::from_str::<RawConfig>("{}").unwrap().into();
        assert_eq!(config.session_ttl(), Duration::from_secs(3_600));
        assert_eq!(config.sweep_interval(), Duration::from_secs(60));
    }
}
