//! Configuration layering tests: project files, env-specific files, environment, global file.

use super::test_utils::{lock_env, Project};
use stackup::config::ConfigLoader;
use stackup::launcher::InvocationMode;
use std::fs;

/// Runs `f` with the given variables set, restoring the previous values afterwards.
fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let _guard = lock_env();
    let previous: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
        .collect();
    for (k, v) in vars {
        std::env::set_var(k, v);
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (k, v) in previous {
        match v {
            Some(v) => std::env::set_var(&k, v),
            None => std::env::remove_var(&k),
        }
    }
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}

#[test]
fn test_env_specific_file_overrides_base_file() {
    let project = Project::new();
    project.write_config("[stack]\nservice = \"api\"\nregistry = \"docker.io\"\n");
    fs::write(
        project.path().join("stackup.staging.toml"),
        "[stack]\nregistry = \"registry.staging.local\"\n",
    )
    .unwrap();

    let xdg = project.path().join("xdg-config");
    let xdg = xdg.to_str().unwrap();
    with_env(&[("STACKUP_ENV", "staging"), ("XDG_CONFIG_HOME", xdg)], || {
        let config = ConfigLoader::load(project.path()).unwrap();
        assert_eq!(config.stack.registry, "registry.staging.local");
        assert_eq!(config.stack.service, "api");
    });
}

#[test]
fn test_environment_overrides_project_file() {
    let project = Project::new();
    project.write_config("mode = \"remote\"\n[runtime]\nengine = \"docker\"\n");

    let xdg = project.path().join("xdg-config");
    let xdg = xdg.to_str().unwrap();
    with_env(
        &[
            ("STACKUP_MODE", "local"),
            ("STACKUP_RUNTIME__ENGINE", "podman"),
            ("XDG_CONFIG_HOME", xdg),
        ],
        || {
            let config = ConfigLoader::load(project.path()).unwrap();
            assert_eq!(config.mode, InvocationMode::Local);
            assert_eq!(config.runtime.engine, "podman");
        },
    );
}

#[test]
fn test_global_file_is_lowest_file_precedence() {
    let project = Project::new();
    let xdg = project.path().join("xdg-config");
    fs::create_dir_all(xdg.join("stackup")).unwrap();
    fs::write(
        xdg.join("stackup").join("config.toml"),
        "[stack]\nservice = \"global-api\"\nregistry = \"global.example\"\n",
    )
    .unwrap();
    project.write_config("[stack]\nregistry = \"project.example\"\n");

    let xdg = xdg.to_str().unwrap();
    with_env(&[("XDG_CONFIG_HOME", xdg)], || {
        let config = ConfigLoader::load(project.path()).unwrap();
        assert_eq!(config.stack.service, "global-api");
        assert_eq!(config.stack.registry, "project.example");
    });
}

#[test]
fn test_explicit_file_skips_project_discovery() {
    let project = Project::new();
    project.write_config("[stack]\nservice = \"discovered\"\n");
    let explicit = project.path().join("explicit.toml");
    fs::write(&explicit, "[stack]\nmanifest = \"compose.prod.yml\"\n").unwrap();

    let _guard = lock_env();
    let config = ConfigLoader::load_from_file(&explicit).unwrap();
    assert_eq!(config.stack.manifest, "compose.prod.yml");
    assert_eq!(config.stack.service, "api");
}
