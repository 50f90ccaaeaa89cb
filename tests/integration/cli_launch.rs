//! End-to-end runs of the stackup binary against fake container engine scripts.
//!
//! Each test writes `docker` / `docker-compose` shell scripts into a temp project,
//! points the config at them, and checks the exit code and recorded calls.

#![cfg(unix)]

use super::test_utils::{lock_env, write_fake_engine, Project};
use std::path::Path;
use std::process::{Command, Output};

struct Fixture {
    project: Project,
}

impl Fixture {
    /// Project with a fake engine; `with_standalone` also installs `docker-compose`.
    fn new(with_standalone: bool) -> Self {
        // Scripts must not be open for writing while another test spawns.
        let _guard = lock_env();
        let project = Project::new();
        let bin = project.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let log = project.calls_log();
        write_fake_engine(&bin.join("docker"), &log);
        if with_standalone {
            write_fake_engine(&bin.join("docker-compose"), &log);
        }
        project.write_config(&format!(
            "[runtime]\nengine = {:?}\nstandalone_compose = {:?}\n",
            bin.join("docker").display().to_string(),
            bin.join("docker-compose").display().to_string(),
        ));
        Self { project }
    }

    fn without_engine() -> Self {
        let project = Project::new();
        let missing = project.path().join("bin").join("docker");
        project.write_config(&format!(
            "[runtime]\nengine = {:?}\n",
            missing.display().to_string()
        ));
        Self { project }
    }

    fn run(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        self.run_in(self.project.path(), args, env)
    }

    fn run_in(&self, project_dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
        let _guard = lock_env();
        let mut command = Command::new(env!("CARGO_BIN_EXE_stackup"));
        command
            .arg("--project-dir")
            .arg(project_dir)
            .args(args)
            .env("HOME", self.project.path().join("home"))
            .env("XDG_CONFIG_HOME", self.project.path().join("xdg-config"))
            .env_remove("STACKUP_LOG")
            .env_remove("STACKUP_MODE")
            .env_remove("STACKUP_ENV");
        for (k, v) in env {
            command.env(k, v);
        }
        command.output().unwrap()
    }

    /// Recorded calls, engine path reduced to its file name.
    fn calls(&self) -> Vec<String> {
        self.project.read_calls()
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_missing_engine_exits_one_with_diagnostic() {
    let fixture = Fixture::without_engine();
    let output = fixture.run(&[], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("is not installed or not callable"));
    assert!(fixture.calls().is_empty());
}

#[test]
fn test_missing_orchestrator_exits_one() {
    let fixture = Fixture::new(false);
    let output = fixture.run(&[], &[("FAKE_COMPOSE_VERSION", "1")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No container orchestrator found"));
    assert!(fixture.calls().iter().all(|c| !c.contains(" up ")));
}

#[test]
fn test_remote_launch_pulls_then_ups_and_exits_zero() {
    let fixture = Fixture::new(true);
    let output = fixture.run(&["up"], &[]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pulling image for service 'api' from docker.io..."));
    assert!(stdout.contains("Stack is up (remote mode)."));
    assert_eq!(
        fixture.calls(),
        vec![
            "docker --version",
            "docker compose version",
            "docker compose -f docker-compose.yml pull api",
            "docker compose -f docker-compose.yml up -d --build",
        ]
    );
}

#[test]
fn test_local_launch_uses_standalone_when_integrated_missing() {
    let fixture = Fixture::new(true);
    let output = fixture.run(&["--mode", "local"], &[("FAKE_COMPOSE_VERSION", "1")]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let calls = fixture.calls();
    assert_eq!(
        calls.last().map(String::as_str),
        Some("docker-compose -f docker-compose.local.yml up -d --build")
    );
    assert!(calls.iter().all(|c| !c.contains(" pull ")));
}

#[test]
fn test_orchestrator_exit_code_is_propagated() {
    let fixture = Fixture::new(false);
    let output = fixture.run(&["--mode", "local"], &[("FAKE_UP_EXIT", "125")]);

    assert_eq!(output.status.code(), Some(125));
    assert!(stderr(&output).contains("exited with status 125"));
}

#[test]
fn test_failure_is_reported_once_on_stderr() {
    let fixture = Fixture::new(false);
    let output = fixture.run(&["--mode", "local"], &[("FAKE_UP_EXIT", "125")]);

    let stderr = stderr(&output);
    let reported = stderr
        .lines()
        .filter(|line| line.contains("exited with status 125"))
        .count();
    assert_eq!(reported, 1, "stderr: {}", stderr);
}

#[test]
fn test_missing_project_dir_exits_one_without_starting() {
    let fixture = Fixture::new(false);
    let missing = fixture.project.path().join("nope");
    let config = fixture.project.path().join("stackup.toml");
    let config = config.to_str().unwrap();
    let output = fixture.run_in(&missing, &["--config", config, "up"], &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(
        stderr.contains(&format!("Project directory not found: {}", missing.display())),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("Failed to start"));
    assert_eq!(
        stderr.lines().filter(|line| line.contains("Project directory not found")).count(),
        1
    );
    assert!(fixture.calls().iter().all(|c| !c.contains(" up ")));
}

#[test]
fn test_check_exits_one_when_nothing_is_installed() {
    let fixture = Fixture::without_engine();
    let output = fixture.run(&["check"], &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("skipped"));
}

#[test]
fn test_usage_error_exits_two() {
    let fixture = Fixture::new(false);
    let output = fixture.run(&["--mode", "hybrid"], &[]);

    assert_eq!(output.status.code(), Some(2));
}
