use serde::Deserialize;

/// Placeholder replaced with the request path in fallback messages
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Error boundary configuration
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundaryConfig {
    /// Maximum accepted request body size in bytes
    ///
    /// Larger bodies are rejected with a payload-too-large error. When unset,
    /// axum's default limit applies.
    #[serde(default)]
    pub max_body_bytes: Option<usize>,
    /// Handling of requests that match no route
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Not-found fallback for unmatched routes
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Message template, `{path}` is replaced with the request path
    #[serde(default = "default_message")]
    pub message: String,
}

impl FallbackConfig {
    /// Render the message for a given request path
    pub fn render(&self, path: &str) -> String {
        self.message.replace(PATH_PLACEHOLDER, path)
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            message: default_message(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_message() -> String {
    format!("{PATH_PLACEHOLDER} not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_path() {
        let fallback = FallbackConfig::default();
        assert_eq!(fallback.render("/api/v1/users"), "/api/v1/users not found");
    }

    #[test]
    fn render_without_placeholder_is_verbatim() {
        let fallback = FallbackConfig {
            enabled: true,
            message: "nothing here".to_owned(),
        };
        assert_eq!(fallback.render("/missing"), "nothing here");
    }
}
