use axum::Json;
use axum::response::{IntoResponse, Response};
use faultline_core::{ApiError, HttpError};
use http::StatusCode;

/// Response produced when a handler fails
///
/// Any taxonomy error converts into it, so handlers can return
/// `Result<_, ErrorResponse>` and use `?` on typed variants directly.
#[derive(Debug)]
pub struct ErrorResponse(ApiError);

impl ErrorResponse {
    /// The underlying error
    pub const fn error(&self) -> &ApiError {
        &self.0
    }
}

impl<E> From<E> for ErrorResponse
where
    E: Into<ApiError>,
{
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let kind = self.0.kind().as_str();

        if self.0.is_server_error() {
            tracing::warn!(status_code = status.as_u16(), error_kind = kind, "{}", self.0);
        } else {
            tracing::debug!(status_code = status.as_u16(), error_kind = kind, "{}", self.0);
        }

        build(status, &self.0)
    }
}

/// Convert any [`HttpError`] into a JSON error response
///
/// The HTTP status equals the record's `statusCode` and the body is the
/// serialized record. Only the `status_code` field is logged, since a foreign
/// implementer has no [`faultline_core::ErrorKind`] to report as `error_kind`.
pub fn into_response<E>(error: &E) -> Response
where
    E: HttpError + ?Sized,
{
    let status = error.status_code();

    if status.is_server_error() {
        tracing::warn!(status_code = status.as_u16(), "{}", error.message());
    } else {
        tracing::debug!(status_code = status.as_u16(), "{}", error.message());
    }

    build(status, error)
}

fn build<E>(status: StatusCode, error: &E) -> Response
where
    E: HttpError + ?Sized,
{
    (status, Json(error.serialize_errors())).into_response()
}
