use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::constants::display::{
    DEFAULT_CUSTOM_PREFIX, DEFAULT_CUSTOM_SUFFIX, DEFAULT_FORMAT, DEFAULT_PAGE_SIZE,
};
use crate::constants::generation::TARGET_TOTAL;
use crate::error::*;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct MainConfig {
    pub defaults: Defaults,
    pub gamer: GamerConfig,
    pub pools: PoolsConfig,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Defaults {
    pub target_total: usize,
    pub page_size: usize,
    pub format: String,
    pub custom_prefix: String,
    pub custom_suffix: String,
}

/// Templates of the gamer category
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct GamerConfig {
    /// Keeps templates that ignore the input text
    pub literal_templates: bool,
    /// Uses only the configured templates instead of extending the built-in ones
    pub replace_builtin: bool,
    pub templates: Vec<String>,
}

/// Extra symbols for the decoration pools
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct PoolsConfig {
    /// Uses only the configured symbols instead of extending the built-in ones
    pub replace_builtin: bool,
    pub arrow: Vec<String>,
    pub gamer: Vec<String>,
    pub aesthetic: Vec<String>,
    pub bangla: Vec<String>,
    pub combinations: Vec<(String, String)>,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            target_total: TARGET_TOTAL,
            page_size: DEFAULT_PAGE_SIZE,
            format: DEFAULT_FORMAT.to_string(),
            custom_prefix: DEFAULT_CUSTOM_PREFIX.to_string(),
            custom_suffix: DEFAULT_CUSTOM_SUFFIX.to_string(),
        }
    }
}

impl MainConfig {
    pub fn new() -> Self {
        MainConfig::default()
    }

    /// Parses and validates the TOML contents of a configuration file
    ///
    /// # Arguments
    /// * `toml_data` - The configuration contents
    /// * `file` - The file name, used in error messages
    pub fn from_toml(toml_data: &str, file: &str) -> Result<Self> {
        let config: MainConfig =
            toml::from_str(toml_data).map_err(|e: toml::de::Error| Error::SerdeTomlError {
                location: ConfigType::MAIN,
                file: file.to_string(),
                cause: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values that cannot be expressed by the types alone
    pub fn validate(&self) -> Result<()> {
        if self.defaults.target_total == 0 {
            return Err(Error::ConfigError(
                "defaults.target_total must be greater than zero".to_string(),
            ));
        }
        if self.defaults.page_size == 0 {
            return Err(Error::ConfigError(
                "defaults.page_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}
