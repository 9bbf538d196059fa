//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.skyword/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::scripture::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SkywordConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Bible id selected automatically once versions have loaded.
    pub default_version: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Resolved Config
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` means no key anywhere; the caller decides how to fail.
    pub api_key: Option<String>,
    pub base_url: String,
    pub default_version: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.skyword/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".skyword").join("config.toml"))
}

/// Load config from `~/.skyword/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SkywordConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SkywordConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SkywordConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SkywordConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SkywordConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SkywordConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // api_key is never logged
    debug!(
        "Config: default_version={:?} base_url={:?}",
        config.general.default_version, config.api.base_url
    );
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# SkyWord Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_version = "de4e12af7f28f599-02"   # Bible id, or SKYWORD_VERSION / --bible

# [api]
# api_key = "..."                           # Or set SCRIPTURE_API_KEY env var
# base_url = "https://api.scripture.api.bible/v1"
"#;

/// Writes the commented-out default config file. Failures are logged only.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SkywordConfig, cli_bible: Option<&str>) -> ResolvedConfig {
    resolve_with(config, cli_bible, |name| std::env::var(name).ok())
}

/// `resolve` with the environment lookup injected.
fn resolve_with(
    config: &SkywordConfig,
    cli_bible: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // API key: env → config. Blank values count as absent
    let api_key = env("SCRIPTURE_API_KEY")
        .or_else(|| config.api.api_key.clone())
        .filter(|k| !k.trim().is_empty());

    // Base URL: env → config → default
    let base_url = env("SCRIPTURE_API_BASE_URL")
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Preferred version: CLI → env → config
    let default_version = cli_bible
        .map(|s| s.to_string())
        .or_else(|| env("SKYWORD_VERSION"))
        .or_else(|| config.general.default_version.clone());

    ResolvedConfig {
        api_key,
        base_url,
        default_version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&SkywordConfig::default(), None, env_of(&[]));
        assert_eq!(resolved.api_key, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.default_version, None);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = SkywordConfig {
            general: GeneralConfig {
                default_version: Some("kjv".to_string()),
            },
            api: ApiConfig {
                api_key: Some("file-key".to_string()),
                base_url: Some("http://localhost:9000/v1".to_string()),
            },
        };
        let resolved = resolve_with(&config, None, env_of(&[]));
        assert_eq!(resolved.api_key.as_deref(), Some("file-key"));
        assert_eq!(resolved.base_url, "http://localhost:9000/v1");
        assert_eq!(resolved.default_version.as_deref(), Some("kjv"));
    }

    #[test]
    fn test_env_wins_over_file() {
        let config = SkywordConfig {
            api: ApiConfig {
                api_key: Some("file-key".to_string()),
                base_url: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with(
            &config,
            None,
            env_of(&[
                ("SCRIPTURE_API_KEY", "env-key"),
                ("SCRIPTURE_API_BASE_URL", "http://env/v1"),
                ("SKYWORD_VERSION", "web"),
            ]),
        );
        assert_eq!(resolved.api_key.as_deref(), Some("env-key"));
        assert_eq!(resolved.base_url, "http://env/v1");
        assert_eq!(resolved.default_version.as_deref(), Some("web"));
    }

    #[test]
    fn test_resolve_cli_bible_wins() {
        let config = SkywordConfig {
            general: GeneralConfig {
                default_version: Some("kjv".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, Some("asv"), env_of(&[("SKYWORD_VERSION", "web")]));
        assert_eq!(resolved.default_version.as_deref(), Some("asv"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let resolved = resolve_with(
            &SkywordConfig::default(),
            None,
            env_of(&[("SCRIPTURE_API_KEY", "  ")]),
        );
        assert_eq!(resolved.api_key, None);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_version = "de4e12af7f28f599-02"

[api]
api_key = "abc123"
base_url = "https://example.test/v1"
"#;
        let config: SkywordConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.general.default_version.as_deref(),
            Some("de4e12af7f28f599-02")
        );
        assert_eq!(config.api.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.api.base_url.as_deref(), Some("https://example.test/v1"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: SkywordConfig = toml::from_str("[api]\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.api.api_key.as_deref(), Some("k"));
        assert!(config.api.base_url.is_none());
        assert!(config.general.default_version.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_and_empty() {
        let config: SkywordConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(config.api.api_key.is_none());
        assert!(config.general.default_version.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("skyword-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.api.api_key.is_none());
        assert!(path.exists());

        fs::write(&path, "[api\nbroken").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
