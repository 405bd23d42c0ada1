//! TOML configuration loading and validation.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::report::Format;

/// Top-level configuration. Every section and field is optional; the
/// defaults reproduce the standard `;`-delimited, `.`-decimal setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub format: FormatConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Field delimiter, exactly one character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_delimiter() -> char {
    ';'
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    /// Decimal separator used for report statistics, exactly one character.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

fn default_decimal_separator() -> char {
    '.'
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    fn validate(&self) -> Result<()> {
        let delimiter = self.input.delimiter;
        if delimiter == '.' || delimiter == '-' || delimiter.is_ascii_digit() {
            return Err(Error::Config(format!(
                "delimiter '{delimiter}' would be ambiguous inside price fields"
            )));
        }
        if delimiter == self.format.decimal_separator {
            return Err(Error::Config(
                "delimiter and decimal_separator must differ".into(),
            ));
        }
        Ok(())
    }

    /// The formatting configuration handed to the reporters.
    pub fn report_format(&self) -> Format {
        Format {
            decimal_separator: self.format.decimal_separator,
        }
    }
}
