//! Integration tests for the stackup launcher

mod cli_launch;
mod config_integration;
