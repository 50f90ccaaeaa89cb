//! Configuration System
//!
//! Layered launcher configuration: built-in defaults, the global config file, project
//! config files, `STACKUP_*` environment variables, and finally CLI flags applied by
//! the binary. Loading lives in [`ConfigLoader`]; this module owns the schema.

use crate::error::LaunchError;
use crate::launcher::InvocationMode;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Mode used when `--mode` is not given
    #[serde(default)]
    pub mode: InvocationMode,

    /// Container engine and orchestrator commands
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// The stack being launched
    #[serde(default)]
    pub stack: StackConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Container engine and orchestrator commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Container engine executable
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Engine subcommand providing integrated orchestration
    #[serde(default = "default_compose_subcommand")]
    pub compose_subcommand: String,

    /// Standalone orchestrator executable used when the subcommand is unavailable
    #[serde(default = "default_standalone_compose")]
    pub standalone_compose: String,
}

fn default_engine() -> String {
    "docker".to_string()
}

fn default_compose_subcommand() -> String {
    "compose".to_string()
}

fn default_standalone_compose() -> String {
    "docker-compose".to_string()
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            compose_subcommand: default_compose_subcommand(),
            standalone_compose: default_standalone_compose(),
        }
    }
}

/// Manifests and service of the stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    /// Service whose image is pulled in remote mode
    #[serde(default = "default_service")]
    pub service: String,

    /// Manifest for remote mode, relative to the project directory
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Manifest for local mode (builds from the local context)
    #[serde(default = "default_local_manifest")]
    pub local_manifest: String,

    /// Registry named in progress messages
    #[serde(default = "default_registry")]
    pub registry: String,

    /// Pass `--build` to `up` so locally-built services are rebuilt
    #[serde(default = "default_true")]
    pub rebuild: bool,
}

fn default_service() -> String {
    "api".to_string()
}

fn default_manifest() -> String {
    "docker-compose.yml".to_string()
}

fn default_local_manifest() -> String {
    "docker-compose.local.yml".to_string()
}

fn default_registry() -> String {
    "docker.io".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
            manifest: default_manifest(),
            local_manifest: default_local_manifest(),
            registry: default_registry(),
            rebuild: default_true(),
        }
    }
}

impl StackConfig {
    /// Manifest used for the given mode.
    pub fn manifest_for(&self, mode: InvocationMode) -> &str {
        match mode {
            InvocationMode::Remote => &self.manifest,
            InvocationMode::Local => &self.local_manifest,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub key: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl LauncherConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let required = [
            ("runtime.engine", &self.runtime.engine),
            ("runtime.compose_subcommand", &self.runtime.compose_subcommand),
            ("runtime.standalone_compose", &self.runtime.standalone_compose),
            ("stack.service", &self.stack.service),
            ("stack.manifest", &self.stack.manifest),
            ("stack.local_manifest", &self.stack.local_manifest),
        ];

        let errors: Vec<ValidationError> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| ValidationError {
                key,
                message: "must not be empty".to_string(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all problems into one `LaunchError`.
    pub fn ensure_valid(&self) -> Result<(), LaunchError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            LaunchError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, LaunchError> {
        toml::to_string_pretty(self).map_err(|e| LaunchError::Output(e.to_string()))
    }
}
