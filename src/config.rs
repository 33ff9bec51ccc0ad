//! Configuration handling for the TUI

use crate::cli::Cli;
use crate::controller::{SubmitBinding, Variant};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration file contents; every field is optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Form implementation shown at startup
    pub variant: Option<Variant>,
    /// Submit enablement for the schema form
    pub schema_submit_binding: Option<SubmitBinding>,
    /// Replace passwords with a placeholder in logged submissions
    pub redact_passwords: Option<bool>,
}

impl AppConfig {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Default log file, kept off the terminal the form draws on
    pub fn log_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.data_local_dir().join("signup-tui.log"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Effective settings after layering CLI flags over the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub variant: Variant,
    pub submit_binding: SubmitBinding,
    pub redact_passwords: bool,
}

impl Settings {
    pub fn resolve(config: &AppConfig, cli: &Cli) -> Self {
        Self {
            variant: cli.variant.or(config.variant).unwrap_or_default(),
            submit_binding: cli
                .submit_binding
                .or(config.schema_submit_binding)
                .unwrap_or_default(),
            redact_passwords: !cli.show_passwords && config.redact_passwords.unwrap_or(true),
        }
    }
}

impl From<Settings> for AppConfig {
    fn from(settings: Settings) -> Self {
        Self {
            variant: Some(settings.variant),
            schema_submit_binding: Some(settings.submit_binding),
            redact_passwords: Some(settings.redact_passwords),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&AppConfig::default(), &Cli::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod app_config {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_config() {
            let config = AppConfig::default();
            assert!(config.variant.is_none());
            assert!(config.schema_submit_binding.is_none());
            assert!(config.redact_passwords.is_none());
        }

        #[test]
        fn test_deserialize_from_empty_json() {
            let parsed: AppConfig = serde_json::from_str("{}").unwrap();
            assert_eq!(parsed, AppConfig::default());
        }

        #[test]
        fn test_deserialize_with_extra_fields() {
            // Should ignore unknown fields
            let json = r#"{"variant": "schema", "unknown_field": "value"}"#;
            let parsed: AppConfig = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.variant, Some(Variant::Schema));
        }

        #[test]
        fn test_log_path_is_separate_from_config() {
            if let Some(log) = AppConfig::log_path() {
                assert!(log.ends_with("signup-tui.log"));
                assert_ne!(Some(log), AppConfig::config_path());
            }
        }

        #[test]
        fn test_load_from_missing_file_is_default() {
            let dir = tempfile::tempdir().unwrap();
            let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
            assert_eq!(config, AppConfig::default());
        }

        #[test]
        fn test_save_then_load() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested").join("config.json");
            let config = AppConfig {
                variant: Some(Variant::Schema),
                schema_submit_binding: Some(SubmitBinding::Validity),
                redact_passwords: Some(false),
            };
            config.save_to(&path).unwrap();
            assert_eq!(AppConfig::load_from(&path).unwrap(), config);
        }

        #[test]
        fn test_load_from_invalid_json_errors() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.json");
            fs::write(&path, "{ not json").unwrap();
            let err = AppConfig::load_from(&path).unwrap_err();
            assert!(err.to_string().contains("invalid config"));
        }
    }

    mod settings {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_defaults() {
            let settings = Settings::default();
            assert_eq!(settings.variant, Variant::Manual);
            assert_eq!(settings.submit_binding, SubmitBinding::AlwaysEnabled);
            assert!(settings.redact_passwords);
        }

        #[test]
        fn test_config_applies_when_cli_silent() {
            let config = AppConfig {
                variant: Some(Variant::Schema),
                schema_submit_binding: Some(SubmitBinding::Validity),
                redact_passwords: Some(false),
            };
            let settings = Settings::resolve(&config, &Cli::default());
            assert_eq!(settings.variant, Variant::Schema);
            assert_eq!(settings.submit_binding, SubmitBinding::Validity);
            assert!(!settings.redact_passwords);
        }

        #[test]
        fn test_settings_round_trip_through_config() {
            let settings = Settings {
                variant: Variant::Schema,
                submit_binding: SubmitBinding::Validity,
                redact_passwords: false,
            };
            let config = AppConfig::from(settings);
            assert_eq!(Settings::resolve(&config, &Cli::default()), settings);
        }

        #[test]
        fn test_cli_overrides_config() {
            let config = AppConfig {
                variant: Some(Variant::Schema),
                ..Default::default()
            };
            let cli = Cli {
                variant: Some(Variant::Manual),
                show_passwords: true,
                ..Default::default()
            };
            let settings = Settings::resolve(&config, &cli);
            assert_eq!(settings.variant, Variant::Manual);
            assert!(!settings.redact_passwords);
        }
    }
}
