//! Configuration file support for medtools.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/medtools/config.toml`.
//! Every field has a default, so a partial file only overrides what it names.

use crate::{Error, Result, MAX_DECIMALS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub bmi: BmiFormConfig,

    #[serde(default)]
    pub creatinine: CreatinineFormConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Accepted ranges and pre-filled values for the BMI form
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BmiFormConfig {
    pub weight_min_kg: f64,
    pub weight_max_kg: f64,
    pub height_min_m: f64,
    pub height_max_m: f64,
    pub weight_kg: f64,
    pub height_m: f64,
}

impl Default for BmiFormConfig {
    fn default() -> Self {
        Self {
            weight_min_kg: 30.0,
            weight_max_kg: 300.0,
            height_min_m: 1.0,
            height_max_m: 2.5,
            weight_kg: 70.0,
            height_m: 1.75,
        }
    }
}

/// Accepted ranges and pre-filled values for the creatinine form
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CreatinineFormConfig {
    pub age_min: u32,
    pub age_max: u32,
    pub weight_min_kg: f64,
    pub weight_max_kg: f64,
    pub creatinine_min: f64,
    pub creatinine_max: f64,
    pub age: u32,
    pub weight_kg: f64,
    pub serum_creatinine: f64,
}

impl Default for CreatinineFormConfig {
    fn default() -> Self {
        Self {
            age_min: 18,
            age_max: 120,
            weight_min_kg: 40.0,
            weight_max_kg: 200.0,
            creatinine_min: 0.1,
            creatinine_max: 10.0,
            age: 50,
            weight_kg: 70.0,
            serum_creatinine: 1.0,
        }
    }
}

/// Result presentation settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for computed results
    pub decimals: u32,
    /// Decimal places for target weights in guidance text
    pub guidance_decimals: u32,
    pub show_references: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: 2,
            guidance_decimals: 1,
            show_references: true,
        }
    }
}

fn check_range(name: &str, min: f64, max: f64, default: f64) -> Result<()> {
    if !(min <= max) {
        return Err(Error::Config(format!(
            "{}: minimum {} exceeds maximum {}",
            name, min, max
        )));
    }
    if !(min..=max).contains(&default) {
        return Err(Error::Config(format!(
            "{}: default {} outside [{}, {}]",
            name, default, min, max
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("medtools").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject ranges that are inverted or whose default sits outside them
    pub fn validate(&self) -> Result<()> {
        let b = &self.bmi;
        check_range("bmi.weight", b.weight_min_kg, b.weight_max_kg, b.weight_kg)?;
        check_range("bmi.height", b.height_min_m, b.height_max_m, b.height_m)?;
        if b.height_min_m <= 0.0 {
            return Err(Error::Config("bmi.height_min_m must be positive".into()));
        }

        let c = &self.creatinine;
        check_range(
            "creatinine.age",
            f64::from(c.age_min),
            f64::from(c.age_max),
            f64::from(c.age),
        )?;
        check_range(
            "creatinine.weight",
            c.weight_min_kg,
            c.weight_max_kg,
            c.weight_kg,
        )?;
        check_range(
            "creatinine.serum_creatinine",
            c.creatinine_min,
            c.creatinine_max,
            c.serum_creatinine,
        )?;
        if c.creatinine_min <= 0.0 {
            return Err(Error::Config(
                "creatinine.creatinine_min must be positive".into(),
            ));
        }

        for (name, decimals) in [
            ("display.decimals", self.display.decimals),
            ("display.guidance_decimals", self.display.guidance_decimals),
        ] {
            if decimals > MAX_DECIMALS {
                return Err(Error::Config(format!(
                    "{}: {} exceeds the maximum of {}",
                    name, decimals, MAX_DECIMALS
                )));
            }
        }

        Ok(())
    }
}
