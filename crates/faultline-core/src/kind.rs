use http::StatusCode;
use strum::{Display, EnumIter, IntoStaticStr};

/// Label carried by every error category
const ERROR_STATUS: &str = "error";

/// Failure categories and their fixed status code / label pairs
///
/// This table is the single source of truth for both the typed variants and
/// [`crate::ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed input
    BadRequest,
    /// Input that parsed but failed validation
    RequestValidation,
    /// Missing resource or route
    NotFound,
    /// Missing or invalid credentials
    NotAuthorized,
    /// Payload exceeded the accepted size
    FileTooLarge,
    /// Service unavailable
    Server,
}

impl ErrorKind {
    /// HTTP status code for this category
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest | Self::RequestValidation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::NotAuthorized => StatusCode::UNAUTHORIZED,
            Self::FileTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Server => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Status label for this category
    pub const fn status(self) -> &'static str {
        match self {
            Self::BadRequest
            | Self::RequestValidation
            | Self::NotFound
            | Self::NotAuthorized
            | Self::FileTooLarge
            | Self::Server => ERROR_STATUS,
        }
    }

    /// Stable snake_case name, used in log fields
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
