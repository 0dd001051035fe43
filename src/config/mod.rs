pub mod model;

use crate::error::{Result, StepperError};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig, StepperConfig, UiConfig};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "STEPPER_TUI_CONFIG";

pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stepper-tui")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

/// Load and validate the config at `path`. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| StepperError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&contents)?;
    config.validate()?;
    tracing::info!(path = %path.display(), steppers = config.steppers.len(), "config loaded");
    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<PathBuf> {
    let path = config_path();
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    let write_err = |source: std::io::Error| StepperError::WriteConfig {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents).map_err(write_err)?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.steppers.len(), AppConfig::default().steppers.len());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.steppers[0].value = 4.0;
        config.steppers[0].label = "Pears".to_string();
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.steppers[0].label, "Pears");
        assert_eq!(loaded.steppers[0].value, 4.0);
        assert_eq!(loaded.appearance, config.appearance);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[[steppers]]\nlabel = \"Bad\"\nminimum_value = 5\nmaximum_value = 5\n",
        )
        .unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, StepperError::InvalidConfig { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "steppers = 3").unwrap();
        assert!(matches!(
            load_config_from(&path).unwrap_err(),
            StepperError::ParseConfig(_)
        ));
    }
}
