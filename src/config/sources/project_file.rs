//! Project config file source: stackup.toml and stackup.{env}.toml in the project directory.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Environment variable selecting the env-specific project file.
pub const ENV_NAME_VAR: &str = "STACKUP_ENV";

/// Add project config files to builder.
/// Precedence: stackup.toml (base) then stackup.{STACKUP_ENV}.toml (env-specific).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    project_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let env_name = std::env::var(ENV_NAME_VAR).unwrap_or_else(|_| "development".to_string());

    let mut builder = builder;

    let base_config_path = project_dir.join("stackup.toml");
    if base_config_path.exists() {
        debug!(config_path = %base_config_path.display(), "Loading project configuration");
        builder = builder.add_source(File::from(base_config_path).required(false));
    }

    let env_config_path = project_dir.join(format!("stackup.{}.toml", env_name));
    if env_config_path.exists() {
        debug!(config_path = %env_config_path.display(), "Loading project configuration");
        builder = builder.add_source(File::from(env_config_path).required(false));
    }

    Ok(builder)
}
