use std::path::Path;
use std::str::FromStr;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails, or
    /// validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        raw.parse()
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the body limit is zero or an enabled fallback has
    /// an empty message
    pub fn validate(&self) -> anyhow::Result<()> {
        let boundary = &self.boundary;

        if boundary.max_body_bytes == Some(0) {
            anyhow::bail!("boundary.max_body_bytes must be greater than 0");
        }

        if boundary.fallback.enabled && boundary.fallback.message.trim().is_empty() {
            anyhow::bail!("boundary.fallback.message must not be empty when the fallback is enabled");
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }
}
