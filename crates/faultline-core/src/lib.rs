//! HTTP-facing error taxonomy
//!
//! Every failure category carries a fixed status code and status label and
//! serializes into the same `{ message, status, statusCode }` record. The
//! server layer turns these into actual HTTP responses, keeping the taxonomy
//! decoupled from axum.

#![allow(clippy::must_use_candidate)]

mod api_error;
mod error;
mod kind;
mod variants;

pub use api_error::ApiError;
pub use error::{ErrorRecord, HttpError};
pub use kind::ErrorKind;
pub use variants::{
    BadRequestError, FileTooLargeError, NotAuthorizedError, NotFoundError, RequestValidationError, ServerError,
};
