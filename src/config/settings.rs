//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{DEFAULT_AVATAR_SIZE, DEFAULT_DATABASE_URL};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Directory whose templates override the built-in widget templates
    pub template_dir: Option<PathBuf>,
    pub avatar_size: u32,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("template_dir", &self.template_dir)
            .field("avatar_size", &self.avatar_size)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            template_dir: None,
            avatar_size: DEFAULT_AVATAR_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` first when present. Unset or unparsable values fall
    /// back to the defaults in [`super::constants`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let avatar_size = match env::var("GRAVATAR_DEFAULT_SIZE") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid GRAVATAR_DEFAULT_SIZE, using default");
                DEFAULT_AVATAR_SIZE
            }),
            Err(_) => DEFAULT_AVATAR_SIZE,
        };

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            template_dir: env::var("TEMPLATE_DIR")
                .ok()
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            avatar_size,
        }
    }
}
