//! Error boundary for axum services
//!
//! Converts the faultline taxonomy into HTTP responses and maps axum's own
//! rejections and unmatched routes onto it, so every failure a client sees
//! has the same `{ message, status, statusCode }` body.

#![allow(clippy::must_use_candidate)]

mod extract;
mod fallback;
mod response;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use faultline_config::BoundaryConfig;

pub use extract::ValidatedJson;
pub use response::{ErrorResponse, into_response};

/// Error boundary built from configuration
#[derive(Debug, Clone)]
pub struct Boundary {
    config: Arc<BoundaryConfig>,
}

impl Boundary {
    pub fn new(config: BoundaryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Attach the not-found fallback and body size limit to a router
    pub fn apply<S>(&self, mut router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        if self.config.fallback.enabled {
            let config = Arc::clone(&self.config);
            router = router.fallback(move |uri: http::Uri| {
                let config = Arc::clone(&config);
                async move { fallback::not_found(&config.fallback, &uri) }
            });
        }

        if let Some(limit) = self.config.max_body_bytes {
            router = router.layer(DefaultBodyLimit::max(limit));
        }

        router
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new(BoundaryConfig::default())
    }
}
