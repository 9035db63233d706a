//! Response helpers: the structured error body and the JSON payload carrier consumed by
//! [`crate::middleware::json_encoder`].

use bytes::Bytes;
use http::{HeaderValue, StatusCode, header};
use serde::Serialize;

use crate::types::Response;

pub const APPLICATION_JSON: &str = "application/json";

/// Body of router-generated error responses: `{"code":404,"msg":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub msg: String,
}

pub fn error_response(status: StatusCode, msg: &str) -> Response {
    let body = ErrorBody {
        code: status.as_u16(),
        msg: msg.to_string(),
    };
    let bytes = match serde_json::to_vec(&body) {
        Ok(mut encoded) => {
            encoded.push(b'\n');
            Bytes::from(encoded)
        }
        Err(err) => {
            tracing::event!(tracing::Level::ERROR, error = %err, "failed to encode error body");
            Bytes::new()
        }
    };

    let mut response = http::Response::new(bytes);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    response
}

pub fn text_response(status: StatusCode, body: impl Into<Bytes>) -> Response {
    let mut response = http::Response::new(body.into());
    *response.status_mut() = status;
    response
}

/// Value a handler leaves in the response extensions for the JSON encoder to serialize.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonPayload {
    Value(serde_json::Value),
    Error(ErrorPayload),
}

/// Error payload: the encoder also applies `code` as the response status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub code: u16,
    pub error: String,
    pub message: String,
}

impl JsonPayload {
    pub fn from_serialize<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(JsonPayload::Value)
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            JsonPayload::Error(err) => StatusCode::from_u16(err.code).ok(),
            JsonPayload::Value(_) => None,
        }
    }
}

/// Empty-bodied response carrying `payload` for the JSON encoder.
pub fn with_payload(payload: JsonPayload) -> Response {
    let mut response = http::Response::new(Bytes::new());
    response.extensions_mut().insert(payload);
    response
}
