use std::fmt::Debug;
use std::path::PathBuf;

pub use config::{Config, ConfigError, FileFormat};
use home::home_dir;

use crate::project;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),
    #[error("Error while retrieving configured value for '{field}'")]
    ReadField { field: &'static str, #[source] source: Box<ConfigError> },
    #[error("Failed to parse field '{field}' with value '{value}'")]
    ParseValue { field: &'static str, value: String, #[source] source: Box<dyn std::error::Error + Send + Sync> },
}

#[derive(Clone, Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub config_files_used: Vec<PathBuf>,
    pub config_files_declared: Vec<PathBuf>,
}

/// Load configuration from files and environment variables used by Harvex.
///
/// This includes in following order:
/// * A default configuration, provided as a string
/// * A development configuration, read from the crate's directory
/// * A system configuration, read from `/etc/harvex/{name}.toml`
/// * A user configuration, read from `[XDG_CONFIG_HOME|~/.config]/harvex/{name}/config.toml`
/// * Environment variables prefixed with `HARVEX_{NAME}_`
/// * Additionally look at the path given in the optional environment variable HARVEX_{name}_CUSTOM_CONFIG_PATH
/// * The `overrides` passed as parameter.
///
pub fn load_config(name: &str, defaults: &str, defaults_format: FileFormat, overrides: Config) -> Result<LoadedConfig, LoadError> {

    let development_config = format!("harvex-{name}/{name}-development.toml");
    let system_config = format!("/etc/harvex/{name}.toml");
    let user_config = format!("harvex/{name}/config.toml");

    let builder = Config::builder()
        .add_source(config::File::from_str(defaults, defaults_format));

    let mut config_files = Vec::new();

    /*
     Additionally look at the path given in the optional environment variable 'HARVEX_{name}_CUSTOM_CONFIG_PATH'.
     Just point the environment variable to the configuration file path:
     - e.g. HARVEX_SERVER_CUSTOM_CONFIG_PATH=/path/to/config.toml
    */
    let name_upper_case = name.to_uppercase();
    let custom_config_path_env_key = format!("HARVEX_{name_upper_case}_CUSTOM_CONFIG_PATH");
    if let Ok(config_path) = std::env::var(custom_config_path_env_key) {
        config_files.push(Some(PathBuf::from(config_path)));
    }

    if project::is_running_in_development() {
        config_files.push(project::make_path_absolute(development_config).ok())
    }

    config_files.push(Some(PathBuf::from(system_config)));

    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg_config_home) => {
            config_files.push(Some(PathBuf::from(xdg_config_home).join(user_config)));
        }
        Err(_) => {
            config_files.push(home_dir().map(|path| path.join(".config").join(user_config)));
        }
    }

    let (sources_used, sources_declared): (Vec<PathBuf>, Vec<PathBuf>) = config_files.into_iter()
        .fold((Vec::new(), Vec::new()), |(mut used, mut declared), path| {
            if let Some(path) = path {
                declared.push(Clone::clone(&path));
                if path.exists() && path.is_file() {
                    used.push(path);
                }
            }
            (used, declared)
        });

    let builder = sources_used.iter()
        .cloned()
        .fold(builder, |builder, path| {
            builder.add_source(config::File::from(path).required(false))
        });

    let builder = builder.add_source(
        config::Environment::with_prefix(&format!("HARVEX_{}", name.to_uppercase()))
            .separator("_")
            .try_parsing(true)
    );

    let settings = builder.add_source(overrides);

    Ok(LoadedConfig {
        config: settings.build()?,
        config_files_used: sources_used,
        config_files_declared: sources_declared,
    })
}
