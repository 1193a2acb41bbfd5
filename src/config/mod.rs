pub mod types;

pub use types::*;

use crate::cli::Cli;
use crate::error::AppError;
use crate::tracks::WrapPolicy;
use crate::tracks::render::LABEL_WIDTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Narrowest wrap that still leaves room for words after the `Subs : N: ` prefix
const MIN_WRAP_WIDTH: usize = LABEL_WIDTH + 2 + 20;

/// Main application configuration, as stored in `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// TMDB lookup settings
    pub tmdb: TmdbConfig,
    /// Release defaults
    pub release: ReleaseConfig,
    /// Subtitle line wrapping
    pub layout: WrapPolicy,
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults when it
    /// does not exist. A file that exists but cannot be parsed is an error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get the default configuration file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nfomaker")
            .join("config.toml")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.layout.wrap_width < MIN_WRAP_WIDTH {
            return Err(AppError::Config(format!(
                "layout.wrap_width must be at least {}",
                MIN_WRAP_WIDTH
            )));
        }
        if self.layout.single_line_limit < self.layout.wrap_width {
            return Err(AppError::Config(
                "layout.single_line_limit must not be smaller than layout.wrap_width".to_string(),
            ));
        }
        if self.tmdb.timeout_secs == 0 {
            return Err(AppError::Config(
                "tmdb.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Effective settings for one run.
///
/// Each value comes from the first layer that has it: command-line flag,
/// environment variable (both collected by clap), config file, built-in
/// default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub tmdb_api_key: Option<String>,
    pub tmdb_language: String,
    pub tmdb_timeout_secs: u64,
    /// Source given on the command line or through the environment
    pub source: Option<String>,
    /// Source from the config file, used only when none is detected
    pub default_source: Option<String>,
    pub notes: String,
    pub output_directory: Option<PathBuf>,
    pub layout: WrapPolicy,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: AppConfig) -> Self {
        let tmdb_api_key = first_non_empty([cli.tmdb_api_key.clone(), Some(config.tmdb.api_key)]);
        let source = first_non_empty([cli.source.clone()]);
        let default_source = first_non_empty([config.release.default_source]);
        let notes = first_non_empty([cli.notes.clone(), config.release.notes]).unwrap_or_default();
        let output_directory = first_non_empty([config.release.output_directory]).map(PathBuf::from);

        Self {
            tmdb_api_key,
            tmdb_language: config.tmdb.language,
            tmdb_timeout_secs: config.tmdb.timeout_secs,
            source,
            default_source,
            notes,
            output_directory,
            layout: config.layout,
        }
    }
}

fn first_non_empty<const N: usize>(layers: [Option<String>; N]) -> Option<String> {
    layers
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}
