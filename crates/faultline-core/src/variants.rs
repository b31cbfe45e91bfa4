use http::StatusCode;

use crate::{ErrorKind, HttpError};

/// Define a typed error whose status fields are fixed by an [`ErrorKind`]
macro_rules! http_error {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        #[error("{message}")]
        pub struct $name {
            message: String,
        }

        impl $name {
            /// Category shared by every instance of this type
            pub const KIND: ErrorKind = ErrorKind::$kind;

            /// Create the error from a caller-supplied message
            pub fn new(message: impl Into<String>) -> Self {
                Self { message: message.into() }
            }

            /// Consume the error, returning its message
            pub fn into_message(self) -> String {
                self.message
            }
        }

        impl HttpError for $name {
            fn message(&self) -> &str {
                &self.message
            }

            fn status_code(&self) -> StatusCode {
                Self::KIND.status_code()
            }

            fn status(&self) -> &str {
                Self::KIND.status()
            }
        }
    };
}

http_error! {
    /// Malformed request (400)
    BadRequestError => BadRequest
}

http_error! {
    /// Request body or parameters failed validation (400)
    RequestValidationError => RequestValidation
}

http_error! {
    /// Requested resource does not exist (404)
    NotFoundError => NotFound
}

http_error! {
    /// Caller is not authenticated (401)
    NotAuthorizedError => NotAuthorized
}

http_error! {
    /// Uploaded payload exceeds the accepted size (413)
    FileTooLargeError => FileTooLarge
}

http_error! {
    /// Service is unavailable (503)
    ServerError => Server
}
