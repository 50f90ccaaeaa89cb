//! Stackup CLI Binary
//!
//! Command-line entry point: detect container tooling and bring the stack up.

use clap::Parser;
use stackup::cli::{map_error, Cli, RunContext};
use stackup::config::ConfigLoader;
use stackup::logging::{init_logging, resolve_log_file_path, LoggingConfig};
use std::process;
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);
    let color = logging_config.color;

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Stackup CLI starting");

    let context = match RunContext::new(cli.project_dir.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            debug!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e, color));
            process::exit(e.exit_code());
        }
    };

    match context.execute(&cli.command(), cli.mode) {
        Ok(output) => {
            info!(exit_code = output.exit_code, "Command completed");
            if !output.text.is_empty() {
                println!("{}", output.text);
            }
            process::exit(output.exit_code);
        }
        Err(e) => {
            debug!("Command failed: {}", e);
            eprintln!("{}", map_error(&e, color));
            process::exit(e.exit_code());
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.project_dir)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
        // Keep verbose output visible in the terminal even when logging to a file.
        if config.output == "file" {
            config.output = "file+stderr".to_string();
        }
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    let output_uses_file = config.output == "file" || config.output == "file+stderr";
    if config.enabled && output_uses_file {
        if let Ok(path) = resolve_log_file_path(cli.log_file.clone(), config.file.clone()) {
            config.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
