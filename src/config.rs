use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::consts::{
    DAY_SECONDS, DEFAULT_BASE_URL, DEVICE_PREFIX, ENV_API_KEY, ENV_BASE_URL, ENV_NETWORK_ID,
    PAGE_SIZE,
};
use crate::error::AppError;
use crate::utils::Timezone;

/// Page sizes the clients endpoint accepts
const PER_PAGE_RANGE: std::ops::RangeInclusive<u32> = 3..=5000;

/// Optional settings file. Secrets stay in the environment: there is no
/// `api_key` field.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) network_id: Option<String>,
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    #[serde(default)]
    pub(crate) prefix: Option<String>,
    #[serde(default)]
    pub(crate) per_page: Option<u32>,
    #[serde(default)]
    pub(crate) timespan: Option<u64>,
    #[serde(default)]
    pub(crate) output_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

/// Where the settings came from, for the startup log
#[derive(Debug)]
pub(crate) enum ConfigOrigin {
    File(PathBuf),
    Defaults,
}

impl Config {
    /// Load `explicit` if given (any failure is an error), otherwise the first
    /// default location that exists and parses.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<(Self, ConfigOrigin), AppError> {
        if let Some(path) = explicit {
            let config = Self::read(path)?;
            return Ok((config, ConfigOrigin::File(path.to_path_buf())));
        }

        for path in Self::get_config_paths() {
            if !path.is_file() {
                continue;
            }
            match Self::read(&path) {
                Ok(config) => return Ok((config, ConfigOrigin::File(path))),
                Err(e) => tracing::warn!("{e}; ignoring it"),
            }
        }

        Ok((Self::default(), ConfigOrigin::Defaults))
    }

    fn read(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/attendance-report/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("attendance-report")
                    .join("config.toml"),
            );
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("attendance-report").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.attendance-report.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".attendance-report.toml"));
        }

        paths
    }
}

/// Everything one report run needs, resolved once at startup.
#[derive(Clone)]
pub(crate) struct RunConfig {
    pub(crate) api_key: String,
    pub(crate) network_id: String,
    pub(crate) base_url: String,
    pub(crate) prefix: String,
    pub(crate) window_seconds: u64,
    pub(crate) per_page: u32,
    pub(crate) output_dir: PathBuf,
    pub(crate) timezone: Timezone,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("api_key", &"<redacted>")
            .field("network_id", &self.network_id)
            .field("base_url", &self.base_url)
            .field("prefix", &self.prefix)
            .field("window_seconds", &self.window_seconds)
            .field("per_page", &self.per_page)
            .field("output_dir", &self.output_dir)
            .field("timezone", &self.timezone)
            .finish()
    }
}

impl RunConfig {
    /// Layer CLI flags over environment over config file over defaults.
    /// `lookup` reads a variable; blank values count as unset.
    pub(crate) fn resolve<F>(cli: &Cli, file: &Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = env(ENV_API_KEY).ok_or(AppError::MissingEnv { name: ENV_API_KEY })?;
        let network_id = env(ENV_NETWORK_ID)
            .or_else(|| file.network_id.clone())
            .filter(|v| !v.trim().is_empty())
            .ok_or(AppError::MissingEnv {
                name: ENV_NETWORK_ID,
            })?;
        let base_url = env(ENV_BASE_URL)
            .or_else(|| file.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let config = Self {
            api_key: api_key.trim().to_string(),
            network_id: network_id.trim().to_string(),
            base_url,
            prefix: cli
                .prefix
                .clone()
                .or_else(|| file.prefix.clone())
                .unwrap_or_else(|| DEVICE_PREFIX.to_string()),
            window_seconds: cli.timespan.or(file.timespan).unwrap_or(DAY_SECONDS),
            per_page: file.per_page.unwrap_or(PAGE_SIZE),
            output_dir: cli
                .output_dir
                .clone()
                .or_else(|| file.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            timezone: Timezone::parse(cli.timezone.as_deref().or(file.timezone.as_deref()))?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        let invalid = |reason: String| Err(AppError::InvalidConfig { reason });
        if self.window_seconds == 0 {
            return invalid("timespan must be a positive number of seconds".to_string());
        }
        if !PER_PAGE_RANGE.contains(&self.per_page) {
            return invalid(format!(
                "per_page must be between {} and {}, got {}",
                PER_PAGE_RANGE.start(),
                PER_PAGE_RANGE.end(),
                self.per_page
            ));
        }
        if self.prefix.is_empty() {
            return invalid("device prefix must not be empty".to_string());
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return invalid(format!("base_url must be an http(s) URL, got {}", self.base_url));
        }
        Ok(())
    }
}
