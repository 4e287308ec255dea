//! Configuration management for contacts-to-bbdb.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for an export run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contacts API base URL
    pub api_base_url: String,

    /// Bearer token for the contacts API
    pub api_token: String,

    /// Destination BBDB file (default: ~/.bbdb)
    pub bbdb_file: PathBuf,

    /// Directory for contact photos (default: ~/.bbdb-images)
    pub image_dir: PathBuf,

    /// Whether to download contact photos (default: true)
    pub fetch_photos: bool,

    /// Contacts requested per feed page (default: 100)
    pub page_size: usize,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Print records to stdout instead of writing the BBDB file (default: false)
    pub dry_run: bool,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Largest page the contacts API accepts.
    pub const MAX_PAGE_SIZE: usize = 1000;

    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACTS_API_BASE_URL`: Base URL for the contacts API
    /// - `CONTACTS_API_TOKEN`: Bearer token for authentication
    ///
    /// Optional environment variables:
    /// - `BBDB_FILE`: Output file (default: ~/.bbdb)
    /// - `BBDB_IMAGE_DIR`: Photo directory (default: ~/.bbdb-images)
    /// - `FETCH_PHOTOS`: Download photos (default: true)
    /// - `PAGE_SIZE`: Feed page size, 1-1000 (default: 100)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `DRY_RUN`: Print to stdout instead of writing the file (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("CONTACTS_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("CONTACTS_API_BASE_URL".to_string()))?;

        let api_token = env::var("CONTACTS_API_TOKEN")
            .map_err(|_| ConfigError::MissingVar("CONTACTS_API_TOKEN".to_string()))?;

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if api_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_API_TOKEN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let bbdb_file = Self::parse_env_path("BBDB_FILE", ".bbdb")?;
        let image_dir = Self::parse_env_path("BBDB_IMAGE_DIR", ".bbdb-images")?;
        let fetch_photos = Self::parse_env_bool("FETCH_PHOTOS", true)?;
        let page_size = Self::parse_env_usize("PAGE_SIZE", 100)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let dry_run = Self::parse_env_bool("DRY_RUN", false)?;

        if page_size == 0 || page_size > Self::MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidValue {
                var: "PAGE_SIZE".to_string(),
                reason: format!("Must be between 1 and {}", Self::MAX_PAGE_SIZE),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            api_base_url,
            api_token,
            bbdb_file,
            image_dir,
            fetch_photos,
            page_size,
            request_timeout,
            dry_run,
            log_level,
        })
    }

    /// Read a path from the environment, falling back to `~/<home_relative>`.
    fn parse_env_path(var_name: &str, home_relative: &str) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if !val.trim().is_empty() => Ok(PathBuf::from(val)),
            _ => dirs_next::home_dir()
                .map(|home| home.join(home_relative))
                .ok_or_else(|| ConfigError::NoHomeDir(var_name.to_string())),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::new(),
            api_token: String::new(),
            bbdb_file: PathBuf::from(".bbdb"),
            image_dir: PathBuf::from(".bbdb-images"),
            fetch_photos: true,
            page_size: 100,
            request_timeout: 10,
            dry_run: false,
            log_level: "info".to_string(),
        }
    }
}
