//! Config facade: single entry point for loading launcher configuration.

use crate::config::merge::builder_with_defaults;
use crate::config::sources::{environment, global_file, project_file};
use crate::config::LauncherConfig;
use crate::error::LaunchError;
use config::File;
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project directory.
    ///
    /// Sources, lowest to highest precedence: defaults, global config file,
    /// `stackup.toml`, `stackup.<STACKUP_ENV>.toml`, `STACKUP_*` environment.
    pub fn load(project_dir: &Path) -> Result<LauncherConfig, LaunchError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = project_file::add_to_builder(builder, project_dir)?;
        let builder = environment::add_to_builder(builder);

        let config: LauncherConfig = builder.build()?.try_deserialize()?;
        config.ensure_valid()?;
        Ok(config)
    }

    /// Load configuration from one explicit file. Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<LauncherConfig, LaunchError> {
        if !path.exists() {
            return Err(LaunchError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);

        let config: LauncherConfig = builder.build()?.try_deserialize()?;
        config.ensure_valid()?;
        Ok(config)
    }
}
