//! Configuration for Sieve.
//!
//! Reads `~/.sieve/config.toml`. Every section and key is optional; a missing
//! file yields the defaults.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//!
//! [search]
//! debounce_ms = 300
//! latency_ms = 500
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use sieve_types::{SearchTiming, ui::UiOptions};

pub const DEBOUNCE_ENV: &str = "SIEVE_DEBOUNCE_MS";
pub const LATENCY_ENV: &str = "SIEVE_LATENCY_MS";

#[derive(Debug, Default, Deserialize)]
pub struct SieveConfig {
    pub app: Option<AppConfig>,
    pub search: Option<SearchConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// Search cycle timing, in milliseconds.
#[derive(Debug, Default, Deserialize)]
pub struct SearchConfig {
    pub debounce_ms: Option<u64>,
    /// Set to 0 to drop the simulated latency stage.
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl SieveConfig {
    /// Load the user config. `Ok(None)` when there is no home directory or no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
            })
            .unwrap_or_default()
    }

    /// Timing from the `[search]` section, falling back to the defaults per key.
    #[must_use]
    pub fn search_timing(&self) -> SearchTiming {
        let mut timing = SearchTiming::default();
        if let Some(search) = &self.search {
            if let Some(ms) = search.debounce_ms {
                timing.debounce = Duration::from_millis(ms);
            }
            if let Some(ms) = search.latency_ms {
                timing.latency = Duration::from_millis(ms);
            }
        }
        timing
    }
}

/// Resolve timing from an optional config plus `SIEVE_DEBOUNCE_MS` / `SIEVE_LATENCY_MS`.
///
/// Environment values win over the file.
#[must_use]
pub fn resolve_search_timing(config: Option<&SieveConfig>) -> SearchTiming {
    resolve_search_timing_with(config, |key| env::var(key).ok())
}

pub fn resolve_search_timing_with<F>(config: Option<&SieveConfig>, lookup: F) -> SearchTiming
where
    F: Fn(&str) -> Option<String>,
{
    let mut timing = config.map(SieveConfig::search_timing).unwrap_or_default();
    if let Some(ms) = millis_from_env(DEBOUNCE_ENV, &lookup) {
        timing.debounce = ms;
    }
    if let Some(ms) = millis_from_env(LATENCY_ENV, &lookup) {
        timing.latency = ms;
    }
    timing
}

fn millis_from_env<F>(key: &str, lookup: &F) -> Option<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(err) => {
            tracing::warn!("Ignoring {key}={raw:?}: {err}");
            None
        }
    }
}

/// `~/.sieve`, home of the config file and logs.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sieve"))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parse_empty_config() {
        let config: SieveConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert!(config.search.is_none());
        assert_eq!(config.search_timing(), SearchTiming::default());
        assert_eq!(config.ui_options(), UiOptions::default());
    }

    #[test]
    fn parse_app_config() {
        let toml_str = r"
[app]
ascii_only = true
";
        let config: SieveConfig = toml::from_str(toml_str).unwrap();
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(!options.high_contrast);
    }

    #[test]
    fn parse_search_config() {
        let toml_str = r"
[search]
debounce_ms = 150
latency_ms = 0
";
        let config: SieveConfig = toml::from_str(toml_str).unwrap();
        let timing = config.search_timing();
        assert_eq!(timing.debounce, Duration::from_millis(150));
        assert_eq!(timing.latency, Duration::ZERO);
    }

    #[test]
    fn partial_search_config_keeps_other_default() {
        let config: SieveConfig = toml::from_str("[search]\nlatency_ms = 100\n").unwrap();
        let timing = config.search_timing();
        assert_eq!(timing.debounce, Duration::from_millis(300));
        assert_eq!(timing.latency, Duration::from_millis(100));
    }

    #[test]
    fn env_overrides_file_values() {
        let config: SieveConfig = toml::from_str("[search]\ndebounce_ms = 150\n").unwrap();
        let timing = resolve_search_timing_with(
            Some(&config),
            lookup_from(&[(DEBOUNCE_ENV, "50"), (LATENCY_ENV, " 0 ")]),
        );
        assert_eq!(timing.debounce, Duration::from_millis(50));
        assert_eq!(timing.latency, Duration::ZERO);
    }

    #[test]
    fn invalid_env_value_is_ignored() {
        let timing = resolve_search_timing_with(None, lookup_from(&[(DEBOUNCE_ENV, "soon")]));
        assert_eq!(timing, SearchTiming::default());
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[app]\nhigh_contrast = true").unwrap();
        let config = SieveConfig::load_from(file.path()).unwrap();
        assert!(config.ui_options().high_contrast);
    }

    #[test]
    fn load_from_reports_parse_error_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search\ndebounce_ms = ").unwrap();
        let err = SieveConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), file.path());
    }

    #[test]
    fn load_from_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = SieveConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let result: Result<SieveConfig, _> = toml::from_str("[search]\ndebounce_ms = \"fast\"\n");
        assert!(result.is_err());
    }
}
