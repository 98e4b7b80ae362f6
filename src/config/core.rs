//! Core configuration structure for ROC AUC evaluation.
//!
//! The four caller-facing flags (`to_onehot_y`, `add_softmax`, `add_sigmoid`,
//! `average`) are folded into one [`RocAucConfig`] value. Mutual exclusivity of
//! the two transforms is checked here, once, whether the configuration comes
//! from the builder, a file or the environment.

use crate::core::constants::ENV_PREFIX;
use crate::core::error::{Result, RocAucError};
use crate::core::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Validated evaluation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile", into = "ConfigFile")]
pub struct RocAucConfig {
    /// Expand class-index labels into indicator columns on multi-channel input
    pub to_onehot_y: bool,
    /// Transform applied to scores before ranking
    pub activation: Activation,
    /// Averaging policy for multi-channel input
    pub average: Average,
    /// Compute per-class AUC values on the rayon pool
    pub parallel: bool,
}

/// On-disk layout of the configuration, using the raw flag names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    to_onehot_y: bool,
    add_softmax: bool,
    add_sigmoid: bool,
    average: Option<String>,
    parallel: bool,
}

impl TryFrom<ConfigFile> for RocAucConfig {
    type Error = RocAucError;

    fn try_from(file: ConfigFile) -> Result<Self> {
        let mut builder = ConfigBuilder::new()
            .to_onehot_y(file.to_onehot_y)
            .add_softmax(file.add_softmax)
            .add_sigmoid(file.add_sigmoid)
            .parallel(file.parallel);
        if let Some(average) = file.average {
            builder = builder.average_str(&average);
        }
        builder.build()
    }
}

impl From<RocAucConfig> for ConfigFile {
    fn from(config: RocAucConfig) -> Self {
        ConfigFile {
            to_onehot_y: config.to_onehot_y,
            add_softmax: config.activation == Activation::Softmax,
            add_sigmoid: config.activation == Activation::Sigmoid,
            average: Some(config.average.to_string()),
            parallel: config.parallel,
        }
    }
}

impl RocAucConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from the individual flags, validating them together.
    pub fn from_flags(
        to_onehot_y: bool,
        add_softmax: bool,
        add_sigmoid: bool,
        average: Average,
    ) -> Result<Self> {
        ConfigBuilder::new()
            .to_onehot_y(to_onehot_y)
            .add_softmax(add_softmax)
            .add_sigmoid(add_sigmoid)
            .average(average)
            .build()
    }

    /// Whether softmax was requested
    pub fn add_softmax(&self) -> bool {
        self.activation == Activation::Softmax
    }

    /// Whether sigmoid was requested
    pub fn add_sigmoid(&self) -> bool {
        self.activation == Activation::Sigmoid
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(RocAucError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        log::debug!("Loaded ROC AUC configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a `.toml` or `.json` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| RocAucError::config(format!("Failed to serialize to TOML: {}", e)))?,
            _ => {
                return Err(RocAucError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Load configuration from `ROC_AUC_*` environment variables
    pub fn load_from_environment() -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(val) = env_flag("TO_ONEHOT_Y")? {
            builder = builder.to_onehot_y(val);
        }
        if let Some(val) = env_flag("ADD_SOFTMAX")? {
            builder = builder.add_softmax(val);
        }
        if let Some(val) = env_flag("ADD_SIGMOID")? {
            builder = builder.add_sigmoid(val);
        }
        if let Some(val) = env_flag("PARALLEL")? {
            builder = builder.parallel(val);
        }
        if let Ok(val) = std::env::var(format!("{}AVERAGE", ENV_PREFIX)) {
            builder = builder.average_str(&val);
        }

        builder.build()
    }
}

fn env_flag(name: &str) -> Result<Option<bool>> {
    let key = format!("{}{}", ENV_PREFIX, name);
    match std::env::var(&key) {
        Ok(val) => parse_flag(&val)
            .map(Some)
            .ok_or_else(|| RocAucError::config(format!("Invalid {}", key))),
        Err(_) => Ok(None),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for [`RocAucConfig`].
///
/// Setters record the raw flags; [`ConfigBuilder::build`] validates them as a
/// whole and reports the first problem found.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    to_onehot_y: bool,
    add_softmax: bool,
    add_sigmoid: bool,
    average: Average,
    parallel: bool,
    validation_errors: Vec<RocAucError>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand labels into one-hot columns on multi-channel input
    pub fn to_onehot_y(mut self, enabled: bool) -> Self {
        self.to_onehot_y = enabled;
        self
    }

    /// Apply softmax over the class axis
    pub fn add_softmax(mut self, enabled: bool) -> Self {
        self.add_softmax = enabled;
        self
    }

    /// Apply elementwise sigmoid
    pub fn add_sigmoid(mut self, enabled: bool) -> Self {
        self.add_sigmoid = enabled;
        self
    }

    /// Set the averaging policy
    pub fn average(mut self, average: Average) -> Self {
        self.average = average;
        self
    }

    /// Set the averaging policy by name
    pub fn average_str(mut self, average: &str) -> Self {
        match average.parse() {
            Ok(avg) => self.average = avg,
            Err(e) => self.validation_errors.push(e),
        }
        self
    }

    /// Compute per-class values in parallel
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<RocAucConfig> {
        if !self.validation_errors.is_empty() {
            return Err(self.validation_errors.remove(0));
        }

        let activation = Activation::from_flags(self.add_softmax, self.add_sigmoid)?;

        Ok(RocAucConfig {
            to_onehot_y: self.to_onehot_y,
            activation,
            average: self.average,
            parallel: self.parallel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RocAucConfig::default();
        assert!(!config.to_onehot_y);
        assert_eq!(config.activation, Activation::None);
        assert_eq!(config.average, Average::Macro);
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder() {
        let config = ConfigBuilder::new()
            .to_onehot_y(true)
            .add_softmax(true)
            .average(Average::Weighted)
            .parallel(true)
            .build()
            .unwrap();

        assert!(config.to_onehot_y);
        assert!(config.add_softmax());
        assert!(!config.add_sigmoid());
        assert_eq!(config.average, Average::Weighted);
        assert!(config.parallel);
    }

    #[test]
    fn test_conflicting_transforms() {
        let result = ConfigBuilder::new()
            .add_softmax(true)
            .add_sigmoid(true)
            .build();
        assert!(matches!(result, Err(RocAucError::ConflictingTransform)));
    }

    #[test]
    fn test_unsupported_average_string() {
        let result = ConfigBuilder::new().average_str("samples").build();
        assert!(matches!(result, Err(RocAucError::UnsupportedAverage { .. })));
    }

    #[test]
    fn test_from_flags() {
        let config = RocAucConfig::from_flags(false, false, true, Average::Micro).unwrap();
        assert_eq!(config.activation, Activation::Sigmoid);
        assert_eq!(config.average, Average::Micro);
    }

    #[test]
    fn test_toml_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roc_auc.toml");

        let config = ConfigBuilder::new()
            .add_sigmoid(true)
            .average(Average::None)
            .build()
            .unwrap();
        config.save_to_file(&path).unwrap();

        let loaded = RocAucConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roc_auc.json");

        let config = ConfigBuilder::new()
            .to_onehot_y(true)
            .add_softmax(true)
            .average(Average::Weighted)
            .build()
            .unwrap();
        config.save_to_file(&path).unwrap();

        let loaded = RocAucConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_file_with_conflicting_flags_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "add_softmax = true\nadd_sigmoid = true\n").unwrap();

        let err = RocAucConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, RocAucError::Toml { .. }));
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.toml");
        std::fs::write(&path, "average = \"micro\"\n").unwrap();

        let config = RocAucConfig::load_from_file(&path).unwrap();
        assert_eq!(config.average, Average::Micro);
        assert_eq!(config.activation, Activation::None);
        assert!(!config.to_onehot_y);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = RocAucConfig::load_from_file(temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(RocAucError::IO { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{\"average\": ").unwrap();
        assert!(matches!(
            RocAucConfig::load_from_file(&path),
            Err(RocAucError::Json { .. })
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roc_auc.yaml");
        std::fs::write(&path, "average: macro\n").unwrap();

        assert!(matches!(
            RocAucConfig::load_from_file(&path),
            Err(RocAucError::Config { .. })
        ));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
