//! Configuration loading and management

use crate::core::error::{ConfigError, PlannerError, PlannerResult};
use crate::entities::CakeSize;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

fn default_layers() -> u32 {
    3
}

fn default_week_start() -> Weekday {
    Weekday::Mon
}

fn default_skip_cancelled() -> bool {
    true
}

/// How much filling goes into each cake size
///
/// # YAML
/// ```yaml
/// grams_per_layer:
///   20: 300
///   25: 400
/// layers:
///   30: 4
/// default_layers: 3
/// size_codes:
///   P: 15
///   M: 20
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerFillingConfig {
    /// Diameter in cm -> grams of filling per layer
    #[serde(default)]
    pub grams_per_layer: BTreeMap<u32, f64>,

    /// Diameter in cm -> number of filling layers, when it differs from `default_layers`
    #[serde(default)]
    pub layers: BTreeMap<u32, u32>,

    #[serde(default = "default_layers")]
    pub default_layers: u32,

    /// Descriptive size code -> diameter in cm. Codes match case-insensitively.
    #[serde(default)]
    pub size_codes: BTreeMap<String, u32>,
}

impl Default for LayerFillingConfig {
    fn default() -> Self {
        Self {
            grams_per_layer: BTreeMap::new(),
            layers: BTreeMap::new(),
            default_layers: default_layers(),
            size_codes: BTreeMap::new(),
        }
    }
}

impl LayerFillingConfig {
    /// Add or replace the grams of filling per layer for a diameter
    pub fn with_layer(mut self, diameter_cm: u32, grams: f64) -> Self {
        self.grams_per_layer.insert(diameter_cm, grams);
        self
    }

    /// Override the layer count for a diameter
    pub fn with_layer_count(mut self, diameter_cm: u32, layers: u32) -> Self {
        self.layers.insert(diameter_cm, layers);
        self
    }

    pub fn with_size_code(mut self, code: impl Into<String>, diameter_cm: u32) -> Self {
        self.size_codes.insert(code.into(), diameter_cm);
        self
    }

    pub fn grams_per_layer(&self, diameter_cm: u32) -> Option<f64> {
        self.grams_per_layer.get(&diameter_cm).copied()
    }

    pub fn layers_for(&self, diameter_cm: u32) -> u32 {
        self.layers
            .get(&diameter_cm)
            .copied()
            .unwrap_or(self.default_layers)
    }

    /// Diameter for an order size: explicit diameters first, then size codes
    pub fn resolve_diameter(&self, size: &CakeSize) -> Option<u32> {
        if let Some(diameter) = size.explicit_diameter() {
            return Some(diameter);
        }
        let CakeSize::Code(code) = size else {
            return None;
        };
        let code = code.trim();
        self.size_codes
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|(_, diameter)| *diameter)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if let Some((diameter, grams)) = self
            .grams_per_layer
            .iter()
            .find(|(_, grams)| !grams.is_finite() || **grams < 0.0)
        {
            return Err(ConfigError::InvalidValue {
                field: format!("grams_per_layer.{}", diameter),
                value: grams.to_string(),
                message: "grams per layer must be a non-negative number".to_string(),
            });
        }
        Ok(())
    }
}

/// Complete planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub layer_filling: LayerFillingConfig,

    /// First day of a production week
    #[serde(default = "default_week_start")]
    pub week_starts_on: Weekday,

    /// Leave cancelled orders out of the plan
    #[serde(default = "default_skip_cancelled")]
    pub skip_cancelled: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            layer_filling: LayerFillingConfig::default(),
            week_starts_on: default_week_start(),
            skip_cancelled: default_skip_cancelled(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> PlannerResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, Some(path.display().to_string()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> PlannerResult<Self> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<String>) -> PlannerResult<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| {
            PlannerError::Config(ConfigError::ParseError {
                file,
                message: e.to_string(),
            })
        })?;
        config.layer_filling.check()?;
        Ok(config)
    }

    /// Standard pan sizes used by the bakery
    pub fn default_config() -> Self {
        Self {
            layer_filling: LayerFillingConfig::default()
                .with_layer(15, 200.0)
                .with_layer(20, 300.0)
                .with_layer(25, 400.0)
                .with_layer(30, 550.0)
                .with_layer_count(30, 4)
                .with_size_code("P", 15)
                .with_size_code("M", 20)
                .with_size_code("G", 25)
                .with_size_code("GG", 30),
            week_starts_on: Weekday::Mon,
            skip_cancelled: true,
        }
    }
}
