use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
    pub detail: Option<Value>,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self.code {
            1 => StatusCode::SERVICE_UNAVAILABLE,
            2 => StatusCode::BAD_GATEWAY,
            3..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        let mut body = json!({
            "code": self.code,
            "error": self.message,
        });

        if let Some(detail) = self.detail {
            body["debug"] = detail;
        }

        (status, Json(body)).into_response()
    }
}

pub fn provider_unconfigured_error() -> Error {
    Error {
        code: 1,
        message: "provider not configured".into(),
        detail: None,
    }
}

pub fn provider_unavailable_error() -> Error {
    Error {
        code: 2,
        message: "provider unavailable".into(),
        detail: None,
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    provider_unavailable_error()
}

pub fn malformed_provider_response_error(payload: Value) -> Error {
    Error {
        code: 3,
        message: "malformed provider response".into(),
        detail: Some(payload),
    }
}

pub fn insufficient_stops_error() -> Error {
    Error {
        code: 100,
        message: "not enough stops".into(),
        detail: None,
    }
}

pub fn too_many_stops_error() -> Error {
    Error {
        code: 101,
        message: "too many stops to optimize".into(),
        detail: None,
    }
}
