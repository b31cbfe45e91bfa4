use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use faultline_core::{ApiError, BadRequestError, FileTooLargeError, RequestValidationError};
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::ErrorResponse;

/// JSON body extractor whose rejections use the error taxonomy
///
/// Behaves like [`axum::Json`] but fails with a faultline error instead of
/// axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(classify(&rejection).into()),
        }
    }
}

/// Map a JSON rejection onto the taxonomy
fn classify(rejection: &JsonRejection) -> ApiError {
    let message = rejection.body_text();

    match rejection {
        JsonRejection::JsonDataError(_) => RequestValidationError::new(message).into(),
        JsonRejection::BytesRejection(_) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            FileTooLargeError::new(message).into()
        }
        _ => BadRequestError::new(message).into(),
    }
}
