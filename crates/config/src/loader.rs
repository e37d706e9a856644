//! Configuration loader for genops
//!
//! Layers, lowest precedence first: built-in defaults, a JSON config file,
//! then `GENOPS_*` environment variables. The merged result is validated
//! before it is handed out.

use crate::config::ShowcaseConfig;
use genops_core::{
    constants::{
        CONFIG_FILENAME, GENOPS_CHAIN_MULTIPLIER_VAR, GENOPS_CHAIN_THRESHOLD_VAR,
        GENOPS_FILTER_THRESHOLD_VAR, GENOPS_FOLD_INITIAL_VAR, GENOPS_VALUES_VAR,
    },
    Error, Result, ResultExt,
};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the file layer of a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file was read
    Defaults,
    /// A file passed explicitly by the caller
    Explicit(PathBuf),
    /// `genops.json` found in the working directory
    Discovered(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "built-in defaults"),
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => {
                write!(f, "{}", path.display())
            }
        }
    }
}

/// Configuration loader that handles all startup configuration
pub struct ConfigLoader {
    /// Explicit config file; missing file is an error
    file: Option<PathBuf>,
    /// Optional directory to search (defaults to current directory)
    directory: Option<PathBuf>,
    /// Whether `GENOPS_*` variables are applied
    env_overrides: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            file: None,
            directory: None,
            env_overrides: true,
        }
    }

    /// Read this file instead of searching for `genops.json`
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Set the directory to search for `genops.json`
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    /// Enable or disable environment variable overrides
    pub fn env_overrides(mut self, enabled: bool) -> Self {
        self.env_overrides = enabled;
        self
    }

    /// Load the configuration from the process environment
    pub fn load(self) -> Result<(ShowcaseConfig, ConfigSource)> {
        self.load_with_env(|name| std::env::var(name).ok())
    }

    /// Load the configuration, resolving variables through `lookup`
    pub fn load_with_env<L>(self, lookup: L) -> Result<(ShowcaseConfig, ConfigSource)>
    where
        L: Fn(&str) -> Option<String>,
    {
        let source = self.resolve_source()?;

        let mut config = match &source {
            ConfigSource::Defaults => ShowcaseConfig::default(),
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => read_config_file(path)?,
        };

        if self.env_overrides {
            apply_env_overrides(&mut config, lookup)?;
        } else {
            debug!("Environment overrides disabled");
        }

        config.validate()?;
        info!("Loaded configuration from {source}");
        Ok((config, source))
    }

    fn resolve_source(&self) -> Result<ConfigSource> {
        if let Some(path) = &self.file {
            return Ok(ConfigSource::Explicit(path.clone()));
        }

        let working_dir = match &self.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()
                .map_err(|e| Error::file_system(".", "current_dir", e))?,
        };

        let candidate = working_dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            debug!("Found {}", candidate.display());
            Ok(ConfigSource::Discovered(candidate))
        } else {
            debug!("No {CONFIG_FILENAME} in {}", working_dir.display());
            Ok(ConfigSource::Defaults)
        }
    }
}

/// Parse a JSON config file; absent fields keep their defaults
pub fn read_config_file(path: &Path) -> Result<ShowcaseConfig> {
    debug!("Reading configuration file {}", path.display());
    let contents =
        std::fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Apply every `GENOPS_*` override that `lookup` resolves
pub fn apply_env_overrides<L>(config: &mut ShowcaseConfig, lookup: L) -> Result<()>
where
    L: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(GENOPS_VALUES_VAR) {
        debug!("Overriding values from {GENOPS_VALUES_VAR}");
        config.values = parse_values(GENOPS_VALUES_VAR, &raw)?;
    }

    let integer_fields: [(&str, &mut i64); 4] = [
        (GENOPS_FILTER_THRESHOLD_VAR, &mut config.filter_threshold),
        (GENOPS_FOLD_INITIAL_VAR, &mut config.fold_initial),
        (GENOPS_CHAIN_MULTIPLIER_VAR, &mut config.chain_multiplier),
        (GENOPS_CHAIN_THRESHOLD_VAR, &mut config.chain_threshold),
    ];
    for (variable, field) in integer_fields {
        if let Some(raw) = lookup(variable) {
            debug!("Overriding {variable}");
            *field = parse_integer(variable, &raw)?;
        }
    }

    Ok(())
}

/// Parse a comma separated list of integers; a blank string is an empty list
pub fn parse_values(variable: &str, raw: &str) -> Result<Vec<i64>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|segment| {
            segment.trim().parse::<i64>().map_err(|e| {
                Error::invalid_environment(
                    variable,
                    raw,
                    format!("'{}' is not an integer: {e}", segment.trim()),
                )
            })
        })
        .collect()
}

fn parse_integer(variable: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|e| {
        Error::invalid_environment(variable, raw, format!("not an integer: {e}"))
    })
}
