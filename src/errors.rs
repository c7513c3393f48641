use std::time::Duration;

use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use serde_json::json;

/// All potential errors in tradfri-rest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A request field is malformed or out of range; never sent to the gateway
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The gateway has no entity with this id
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i64 },

    /// Network or gateway communication failure
    #[error("gateway transport error: {0}")]
    Transport(String),

    /// The gateway did not answer within the configured deadline
    #[error("gateway call timed out after {0:?}")]
    Timeout(Duration),

    /// Used when failing to dump json
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Used when failing to load json
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// Local file access, e.g. loading a gateway snapshot
    #[error("io {action} error: {err:?}")]
    Io { action: String, err: std::io::Error },
}

impl Error {
    /// Create a new invalid argument error
    pub fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidArgument(reason.into())
    }

    /// Create a new device not found error
    pub fn device_not_found(id: i64) -> Self {
        Error::NotFound { kind: "device", id }
    }

    /// Create a new group not found error
    pub fn group_not_found(id: i64) -> Self {
        Error::NotFound { kind: "group", id }
    }

    /// Create a new io error
    pub fn io(action: &str, err: std::io::Error) -> Self {
        Error::Io {
            action: action.to_string(),
            err,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Error::Transport(_) | Error::JsonDump(_) | Error::JsonLoad(_) | Error::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(json!({ "message": self.to_string() }).to_string())
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            Error::invalid("power").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::device_not_found(42).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Transport("reset".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Timeout(Duration::from_secs(1)).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[actix_web::test]
    async fn response_carries_message_envelope() {
        let resp = Error::group_not_found(7).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({"message": "group 7 not found"}));
    }
}
