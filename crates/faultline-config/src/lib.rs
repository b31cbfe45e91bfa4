#![allow(clippy::must_use_candidate)]

mod boundary;
mod loader;

use serde::Deserialize;

pub use boundary::{BoundaryConfig, FallbackConfig, PATH_PLACEHOLDER};

/// Top-level faultline configuration
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Error boundary configuration
    #[serde(default)]
    pub boundary: BoundaryConfig,
}
