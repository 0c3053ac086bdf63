//! Engine configuration loaded from the environment.
//!
//! Variables (all optional):
//! - `STUDYGROUP_DEFAULT_MAX_MEMBERS` - capacity used when a group is created
//!   without one (default 10, must be at least 2)
//! - `STUDYGROUP_LOG` - tracing filter directive (`RUST_LOG` wins when set)
//!
//! A `.env.local` or `.env` file at the repository root is loaded first.

use std::path::Path;

use studygroup_domain::MIN_GROUP_SIZE;

pub const DEFAULT_MAX_MEMBERS: u32 = 10;
pub const DEFAULT_LOG_FILTER: &str = "studygroup_engine=info,studygroup_domain=info";

const MAX_MEMBERS_VAR: &str = "STUDYGROUP_DEFAULT_MAX_MEMBERS";
const LOG_FILTER_VAR: &str = "STUDYGROUP_LOG";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    NotANumber { var: &'static str, value: String },
    #[error("{var} must be at least {min}, got {value}")]
    TooSmall {
        var: &'static str,
        value: u32,
        min: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub default_max_members: u32,
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_max_members: DEFAULT_MAX_MEMBERS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load `.env` files from the repository root, then read the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv_from_repo_root();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let default_max_members = match non_empty(MAX_MEMBERS_VAR) {
            Some(raw) => parse_max_members(&raw)?,
            None => DEFAULT_MAX_MEMBERS,
        };

        let log_filter = non_empty(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        Ok(Self {
            default_max_members,
            log_filter,
        })
    }
}

fn parse_max_members(raw: &str) -> Result<u32, ConfigError> {
    let value: u32 = raw.parse().map_err(|_| ConfigError::NotANumber {
        var: MAX_MEMBERS_VAR,
        value: raw.to_string(),
    })?;
    if value < MIN_GROUP_SIZE {
        return Err(ConfigError::TooSmall {
            var: MAX_MEMBERS_VAR,
            value,
            min: MIN_GROUP_SIZE,
        });
    }
    Ok(value)
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
