//! Invocation mode: pull a published image or build from local source.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the stack is brought up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvocationMode {
    /// Pull the service image from its registry, then start the stack.
    #[default]
    Remote,
    /// Start the stack from the local-build manifest. Never pulls.
    Local,
}

impl InvocationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvocationMode::Remote => "remote",
            InvocationMode::Local => "local",
        }
    }

    pub fn pulls_image(&self) -> bool {
        matches!(self, InvocationMode::Remote)
    }
}

impl fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
