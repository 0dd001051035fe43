//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::appearance::Appearance;
use crate::error::{Result, StepperError};
use crate::stepper::StepperValueModel;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

/// Largest gap or inset, in cells, a config may ask for.
pub const MAX_LAYOUT_CELLS: u16 = 32;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_steppers")]
    pub steppers: Vec<StepperConfig>,
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            steppers: default_steppers(),
            appearance: Appearance::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reject entries the value model would silently fix up.
    pub fn validate(&self) -> Result<()> {
        validate_appearance("appearance", &self.appearance)?;
        for (i, stepper) in self.steppers.iter().enumerate() {
            if stepper.label.trim().is_empty() {
                return Err(StepperError::InvalidConfig {
                    field: format!("steppers[{}].label", i),
                    reason: "label cannot be empty".to_string(),
                });
            }
            for (name, number) in [
                ("minimum_value", stepper.minimum_value),
                ("maximum_value", stepper.maximum_value),
                ("step_value", stepper.step_value),
            ] {
                if !number.is_finite() {
                    return Err(StepperError::InvalidConfig {
                        field: format!("steppers[{}].{}", i, name),
                        reason: format!("must be a finite number, got {}", number),
                    });
                }
            }
            if stepper.minimum_value.partial_cmp(&stepper.maximum_value) != Some(Ordering::Less) {
                return Err(StepperError::InvalidConfig {
                    field: format!("steppers[{}]", i),
                    reason: format!(
                        "minimum_value ({}) must be below maximum_value ({})",
                        stepper.minimum_value, stepper.maximum_value
                    ),
                });
            }
            if let Some(appearance) = &stepper.appearance {
                validate_appearance(&format!("steppers[{}].appearance", i), appearance)?;
            }
        }
        if self.ui.history_size == 0 {
            return Err(StepperError::InvalidConfig {
                field: "ui.history_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Effective appearance for a stepper: its own override, else the global one.
    pub fn appearance_for(&self, stepper: &StepperConfig) -> Appearance {
        stepper
            .appearance
            .clone()
            .unwrap_or_else(|| self.appearance.clone())
    }
}

fn validate_appearance(prefix: &str, appearance: &Appearance) -> Result<()> {
    let layout = &appearance.layout;
    let inset = &layout.content_inset;
    for (name, cells) in [
        ("gap", layout.gap),
        ("content_inset.top", inset.top),
        ("content_inset.bottom", inset.bottom),
        ("content_inset.leading", inset.leading),
        ("content_inset.trailing", inset.trailing),
    ] {
        if cells > MAX_LAYOUT_CELLS {
            return Err(StepperError::InvalidConfig {
                field: format!("{}.layout.{}", prefix, name),
                reason: format!("{} exceeds the limit of {} cells", cells, MAX_LAYOUT_CELLS),
            });
        }
    }
    Ok(())
}

/// One labelled stepper in the demo list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepperConfig {
    pub label: String,
    #[serde(default)]
    pub minimum_value: f64,
    #[serde(default = "default_maximum")]
    pub maximum_value: f64,
    #[serde(default = "default_step")]
    pub step_value: f64,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub decimal_places: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<Appearance>,
}

impl StepperConfig {
    pub fn new(label: &str, minimum_value: f64, maximum_value: f64, step_value: f64) -> Self {
        Self {
            label: label.to_string(),
            minimum_value,
            maximum_value,
            step_value,
            value: minimum_value,
            decimal_places: 0,
            appearance: None,
        }
    }

    pub fn build_model(&self) -> StepperValueModel {
        StepperValueModel::new(
            self.minimum_value,
            self.maximum_value,
            self.step_value,
            self.value,
        )
        .with_decimal_places(self.decimal_places)
    }
}

/// Demo UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Value changes kept in the history panel.
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Diagnostic log settings. Output goes to a file because the terminal
/// belongs to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Defaults to `<data_dir>/stepper-tui/stepper-tui.log`.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_file: None,
            filter: default_filter(),
        }
    }
}

fn default_steppers() -> Vec<StepperConfig> {
    vec![
        StepperConfig {
            value: 2.0,
            ..StepperConfig::new("Apples", 0.0, 10.0, 1.0)
        },
        StepperConfig {
            value: 21.0,
            decimal_places: 1,
            ..StepperConfig::new("Temperature", -10.0, 40.0, 0.5)
        },
        StepperConfig {
            value: 50.0,
            ..StepperConfig::new("Volume", 0.0, 100.0, 5.0)
        },
        StepperConfig {
            value: 0.1,
            decimal_places: 2,
            ..StepperConfig::new("Discount", 0.0, 0.5, 0.05)
        },
    ]
}

fn default_true() -> bool {
    true
}
fn default_maximum() -> f64 {
    100.0
}
fn default_step() -> f64 {
    1.0
}
fn default_history_size() -> usize {
    100
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_filter() -> String {
    "stepper_tui=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::Shape;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.steppers.len(), 4);
        assert_eq!(config.ui.history_size, 100);
        assert!(config.logging.enabled);
    }

    #[test]
    fn test_stepper_defaults_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [[steppers]]
            label = "Cups"
            value = 3
            "#,
        )
        .unwrap();
        let s = &config.steppers[0];
        assert_eq!(s.minimum_value, 0.0);
        assert_eq!(s.maximum_value, 100.0);
        assert_eq!(s.step_value, 1.0);
        assert_eq!(s.value, 3.0);
        assert!(s.appearance.is_none());
        assert_eq!(s.build_model().formatted_value(), "3");
    }

    #[test]
    fn test_per_stepper_appearance_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [appearance.layout]
            shape = "plain"

            [[steppers]]
            label = "A"

            [[steppers]]
            label = "B"
            [steppers.appearance.layout]
            shape = "double"
            "#,
        )
        .unwrap();
        assert_eq!(config.appearance_for(&config.steppers[0]).layout.shape, Shape::Plain);
        assert_eq!(config.appearance_for(&config.steppers[1]).layout.shape, Shape::Double);
    }

    #[test]
    fn test_validate_rejects_crossed_bounds() {
        let mut config = AppConfig::default();
        config.steppers[1].minimum_value = 50.0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config for `steppers[1]`: minimum_value (50) must be below maximum_value (40)"
        );
    }

    #[test]
    fn test_validate_rejects_empty_label_and_history() {
        let mut config = AppConfig::default();
        config.steppers[0].label = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.ui.history_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_layout() {
        let config: AppConfig = toml::from_str("[appearance.layout]\ngap = 40000").unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config for `appearance.layout.gap`: 40000 exceeds the limit of 32 cells"
        );

        let config: AppConfig = toml::from_str(
            r#"
            [[steppers]]
            label = "A"
            [steppers.appearance.layout.content_inset]
            leading = 500
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_numbers() {
        let config: AppConfig = toml::from_str(
            r#"
            [[steppers]]
            label = "Cups"
            step_value = nan
            value = 3
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config for `steppers[0].step_value`: must be a finite number, got NaN"
        );

        let mut config = AppConfig::default();
        config.steppers[2].maximum_value = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_model_uses_config_values() {
        let s = StepperConfig {
            value: 21.0,
            decimal_places: 1,
            ..StepperConfig::new("Temperature", -10.0, 40.0, 0.5)
        };
        let model = s.build_model();
        assert_eq!(model.minimum_value(), -10.0);
        assert_eq!(model.step_value(), 0.5);
        assert_eq!(model.formatted_value(), "21.0");
    }
}
