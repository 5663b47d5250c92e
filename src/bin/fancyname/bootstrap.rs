use chrono::prelude::*;
use fancyname::debug;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

pub use fancyname::{
    config::{parse as config_parse, MainConfig},
    error::*,
};

use fancyname::constants::config::DEFAULT_CONF_FILE;

use crate::directories::PROJECT_DIRS;

static DEFAULT_CONF: &str = "# File automatically generated on ${date}\n\
                            [defaults]\n\
                            target_total  = 42000\n\
                            page_size     = 200\n\
                            format        = \"{{ text }}\"\n\
                            custom_prefix = \"🏹\"\n\
                            custom_suffix = \"🏹\"\n\n\
                            [gamer]\n\
                            literal_templates = false\n\
                            replace_builtin   = false\n\
                            templates         = []\n\n\
                            [pools]\n\
                            replace_builtin = false\n\
                            arrow           = []\n\
                            gamer           = []\n\
                            aesthetic       = []\n\
                            bangla          = []\n\
                            combinations    = []\n";

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    /// Loads the configuration from the given file, or from the default location
    /// when no file is supplied.
    pub fn new(config_file: Option<&str>) -> Result<Self> {
        let config = match config_file {
            Some(path) => parse_config_file(&expand_path(path)?, false)?,
            None => parse_main_config()?,
        };
        Ok(BootStrap { config })
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}

/// Expands `~` and environment variables in a path supplied in the command line
fn expand_path(path: &str) -> Result<PathBuf> {
    match shellexpand::full(path) {
        Ok(expanded) => Ok(PathBuf::from(expanded.as_ref())),
        Err(e) => Err(Error::InterpolationError {
            location: ConfigType::ARGS,
            cause: e.to_string(),
        }),
    }
}

/// Creates the default main configuration file in the config directory
/// # Arguments
/// * `config_file` - The path to the configuration file
///
/// # Returns
/// A `Result` containing the configuration data as a `String`
///
/// # Errors
/// * `ConfigError` - If the configuration file has no parent directory
/// * `Io` - If an I/O error occurs while creating the configuration file
fn create_default_config(config_file: &Path) -> Result<String> {
    let parent_dir = config_file
        .parent()
        .ok_or_else(|| Error::ConfigError(config_file.to_string_lossy().into_owned()))?;
    std::fs::create_dir_all(parent_dir)?;
    let current_date: DateTime<Local> = Local::now();
    let config_data = DEFAULT_CONF.replacen("${date}", &current_date.to_string(), 1);

    debug!("Creating default configuration at {}", config_file.display());
    File::create(config_file)?.write_all(config_data.as_bytes())?;
    Ok(config_data)
}

/// Reads and validates a configuration file
///
/// # Arguments
/// * `conf_file` - The path to the configuration file
/// * `create` - Whether a missing file is created with the default contents
fn parse_config_file(conf_file: &Path, create: bool) -> Result<MainConfig> {
    let file_name = conf_file
        .file_name()
        .map_or(DEFAULT_CONF_FILE.to_string(), |f| {
            f.to_string_lossy().into_owned()
        });

    let toml_data = match config_parse(conf_file) {
        Ok(data) => data,
        Err(Error::Io(e)) if create && e.kind() == ::std::io::ErrorKind::NotFound => {
            create_default_config(conf_file)?
        }
        Err(Error::Io(e)) => {
            return Err(Error::ConfigReadError {
                file: file_name,
                cause: e.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    debug!("Loading configuration from {}", conf_file.display());
    MainConfig::from_toml(&toml_data, &file_name)
}

/// Processes the main configuration file retrieving the associated `MainConfig` structure
///
/// If the file does not exist, a default configuration file is created first.
///
/// # Errors
///
/// This function returns an error if the configuration file cannot be read or parsed.
pub fn parse_main_config() -> Result<MainConfig> {
    let conf_file = PROJECT_DIRS.config_dir().join(DEFAULT_CONF_FILE);
    parse_config_file(&conf_file, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = MainConfig::from_toml(DEFAULT_CONF, DEFAULT_CONF_FILE).unwrap();
        let defaults = MainConfig::default();
        assert_eq!(config.defaults.target_total, defaults.defaults.target_total);
        assert_eq!(config.defaults.format, defaults.defaults.format);
        assert_eq!(config.defaults.custom_prefix, defaults.defaults.custom_prefix);
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = TempDir::new().unwrap();
        let conf_file = dir.path().join("nested").join(DEFAULT_CONF_FILE);
        let config = parse_config_file(&conf_file, true).unwrap();
        assert_eq!(config.defaults.page_size, 200);

        let contents = std::fs::read_to_string(&conf_file).unwrap();
        assert!(contents.starts_with("# File automatically generated on "));
        assert!(!contents.contains("${date}"));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let conf_file = dir.path().join("custom.toml");
        let result = parse_config_file(&conf_file, false);
        assert!(matches!(
            result,
            Err(Error::ConfigReadError { file, .. }) if file == "custom.toml"
        ));
        assert!(!conf_file.exists());
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let conf_file = dir.path().join("broken.toml");
        std::fs::write(&conf_file, "[defaults]\npage_size = \"many\"\n").unwrap();
        let result = parse_config_file(&conf_file, false);
        assert!(matches!(
            result,
            Err(Error::SerdeTomlError { file, .. }) if file == "broken.toml"
        ));
    }

    #[test]
    fn test_expand_path() {
        std::env::set_var("FANCYNAME_TEST_DIR", "/tmp/fancy");
        assert_eq!(
            expand_path("$FANCYNAME_TEST_DIR/conf.toml").unwrap(),
            PathBuf::from("/tmp/fancy/conf.toml")
        );
        let result = expand_path("$FANCYNAME_UNSET_VARIABLE_FOR_TEST/conf.toml");
        assert!(matches!(
            result,
            Err(Error::InterpolationError {
                location: ConfigType::ARGS,
                ..
            })
        ));
    }
}
