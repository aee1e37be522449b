use harvex_util::settings::{LoadError, LoadedConfig};

pub fn load_with_overrides(overrides: config::Config) -> Result<LoadedConfig, LoadError> {
    harvex_util::settings::load_config(
        "server",
        include_str!("../server.toml"),
        config::FileFormat::Toml,
        overrides,
    )
}

#[cfg(test)]
pub fn load_defaults() -> Result<LoadedConfig, LoadError> {
    load_with_overrides(config::Config::default())
}
