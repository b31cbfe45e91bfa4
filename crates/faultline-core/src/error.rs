use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Trait for errors that can be reported to an HTTP client
///
/// Implemented by every variant of the taxonomy and by [`crate::ApiError`].
/// The trait has no constructor, so only concrete types carrying a fixed
/// status code and status label can ever be raised.
pub trait HttpError: std::error::Error {
    /// Human-readable message supplied at construction
    fn message(&self) -> &str;

    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Status label reported alongside the code (always `"error"` today)
    fn status(&self) -> &str;

    /// Build the plain record sent to clients as the response body
    fn serialize_errors(&self) -> ErrorRecord {
        ErrorRecord {
            message: self.message().to_owned(),
            status: self.status().to_owned(),
            status_code: self.status_code().as_u16(),
        }
    }
}

/// Serialized form of an [`HttpError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub message: String,
    pub status: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct Teapot(String);

    impl HttpError for Teapot {
        fn message(&self) -> &str {
            &self.0
        }

        fn status_code(&self) -> StatusCode {
            StatusCode::IM_A_TEAPOT
        }

        fn status(&self) -> &str {
            "fail"
        }
    }

    #[test]
    fn default_serialization_reads_trait_accessors() {
        let record = Teapot("short and stout".to_owned()).serialize_errors();

        assert_eq!(
            record,
            ErrorRecord {
                message: "short and stout".to_owned(),
                status: "fail".to_owned(),
                status_code: 418,
            }
        );
    }

    #[test]
    fn record_uses_camel_case_status_code() {
        let record = ErrorRecord {
            message: "bad input".to_owned(),
            status: "error".to_owned(),
            status_code: 400,
        };

        insta::assert_json_snapshot!(record, @r#"
        {
          "message": "bad input",
          "status": "error",
          "statusCode": 400
        }
        "#);
    }

    #[test]
    fn record_deserializes_from_wire_body() {
        let record: ErrorRecord =
            serde_json::from_str(r#"{"message":"down","status":"error","statusCode":503}"#).unwrap();

        assert_eq!(record.message, "down");
        assert_eq!(record.status, "error");
        assert_eq!(record.status_code, 503);
    }
}
