use http::StatusCode;

use crate::{
    BadRequestError, ErrorKind, FileTooLargeError, HttpError, NotAuthorizedError, NotFoundError,
    RequestValidationError, ServerError,
};

/// Error tagged with its category
///
/// Lets call sites pick the category at runtime while keeping the same
/// serialized contract as the typed variants, all of which convert into it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestValidation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn not_authorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAuthorized, message)
    }

    pub fn file_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::FileTooLarge, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Server, message)
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether this error represents a failure on the service side
    pub fn is_server_error(&self) -> bool {
        self.kind.status_code().is_server_error()
    }
}

impl HttpError for ApiError {
    fn message(&self) -> &str {
        &self.message
    }

    fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    fn status(&self) -> &str {
        self.kind.status()
    }
}

macro_rules! impl_from_variant {
    ($($variant:ty),+ $(,)?) => {
        $(
            impl From<$variant> for ApiError {
                fn from(error: $variant) -> Self {
                    Self::new(<$variant>::KIND, error.into_message())
                }
            }
        )+
    };
}

impl_from_variant!(
    BadRequestError,
    RequestValidationError,
    NotFoundError,
    NotAuthorizedError,
    FileTooLargeError,
    ServerError,
);
