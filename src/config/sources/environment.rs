//! Environment source: STACKUP_<SECTION>__<KEY> variables.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add `STACKUP_*` environment overrides, e.g. `STACKUP_RUNTIME__ENGINE=podman`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("STACKUP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
