use std::path::PathBuf;

use crate::server::{
    error::config::ConfigError,
    util::parse::{parse_bool_flag, parse_positive},
};

const DEFAULT_PORT: u16 = 3003;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_SEEDS_DIR: &str = "seeds";
/// Default number of fixtures seeded concurrently.
pub const DEFAULT_SEED_CONCURRENCY: usize = 4;

pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,

    /// `None` when `USE_DATABASE` is disabled; the API routes are then not mounted.
    pub database: Option<DatabaseSettings>,
}

pub struct DatabaseSettings {
    pub url: String,
    pub jwt_secret: String,
    pub seed_on_startup: bool,
    pub seeds_dir: PathBuf,
    pub seed_concurrency: usize,
}

/// Settings for a single seeding run.
#[derive(Debug, Clone)]
pub struct SeedSettings {
    pub database_url: String,
    pub dir: PathBuf,
    pub concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let use_database = match lookup("USE_DATABASE") {
            Some(value) => parse_bool_flag("USE_DATABASE", &value)?,
            None => true,
        };

        let database = if use_database {
            Some(DatabaseSettings {
                url: require("DATABASE_URL")?,
                jwt_secret: require("JWT_SECRET")?,
                seed_on_startup: match lookup("SEED_ON_STARTUP") {
                    Some(value) => parse_bool_flag("SEED_ON_STARTUP", &value)?,
                    None => false,
                },
                seeds_dir: lookup("SEEDS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SEEDS_DIR)),
                seed_concurrency: match lookup("SEED_CONCURRENCY") {
                    Some(value) => parse_positive("SEED_CONCURRENCY", &value)?,
                    None => DEFAULT_SEED_CONCURRENCY,
                },
            })
        } else {
            None
        };

        Ok(Self {
            port: match lookup("PORT") {
                Some(value) => parse_positive("PORT", &value)?,
                None => DEFAULT_PORT,
            },
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            database,
        })
    }

    /// Settings for a seeding run, optionally reading fixtures from `dir` instead of
    /// `SEEDS_DIR`.
    ///
    /// # Returns
    /// - `Ok(SeedSettings)` - Settings derived from the database configuration
    /// - `Err(ConfigError::DatabaseDisabled)` - `USE_DATABASE` is off
    pub fn seed_settings(&self, dir: Option<PathBuf>) -> Result<SeedSettings, ConfigError> {
        let database = self
            .database
            .as_ref()
            .ok_or(ConfigError::DatabaseDisabled)?;

        Ok(SeedSettings {
            database_url: database.url.clone(),
            dir: dir.unwrap_or_else(|| database.seeds_dir.clone()),
            concurrency: database.seed_concurrency,
        })
    }
}
