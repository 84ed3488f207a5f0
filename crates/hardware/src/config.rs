//! Configuration for the register file model.
//!
//! This module defines the configuration structures used to parameterize the
//! register file. It provides:
//! 1. **Defaults:** Baseline hardware constants (cell width, reset value).
//! 2. **Structures:** `Config` and `RegFileConfig`, deserializable from JSON.
//! 3. **Validation:** Range checks applied before a register file is built.
//!
//! Missing fields fall back to their defaults, so `{}` is a valid configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    use crate::common::constants::REG_WIDTH;

    /// Register cell width in bits.
    pub const WIDTH: u32 = REG_WIDTH;

    /// Value every cell holds after bring-up.
    pub const RESET_VALUE: u32 = 0;
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Register file parameters.
    #[serde(default)]
    pub regfile: RegFileConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON and
    /// [`ConfigError::InvalidWidth`] when validation fails.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns the first section error found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.regfile.validate()
    }
}

/// Register file parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegFileConfig {
    /// Cell width in bits (1..=32); write data is truncated to this width.
    #[serde(default = "RegFileConfig::default_width")]
    pub width: u32,

    /// Initial value of every cell. `x0` still reads as zero through the ports.
    #[serde(default = "RegFileConfig::default_reset_value")]
    pub reset_value: u32,
}

impl RegFileConfig {
    fn default_width() -> u32 {
        defaults::WIDTH
    }

    fn default_reset_value() -> u32 {
        defaults::RESET_VALUE
    }

    /// Checks that the width fits a 32-bit cell.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] when `width` is 0 or above 32.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.width > defaults::WIDTH {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        Ok(())
    }
}

impl Default for RegFileConfig {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            reset_value: defaults::RESET_VALUE,
        }
    }
}
