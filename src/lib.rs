//! Stackup: container stack bootstrap launcher
//!
//! Detects the installed container engine and orchestrator, chooses between pulling a
//! published image and building from local source, runs the orchestration commands, and
//! propagates their exit status.

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
