use faultline_config::FallbackConfig;
use faultline_core::NotFoundError;

use crate::ErrorResponse;

/// Not-found response for a request that matched no route
pub fn not_found(config: &FallbackConfig, uri: &http::Uri) -> ErrorResponse {
    NotFoundError::new(config.render(uri.path())).into()
}
