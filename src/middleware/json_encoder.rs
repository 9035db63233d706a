use bytes::Bytes;
use http::{HeaderValue, StatusCode, header};
use std::sync::Arc;

use super::Middleware;
use crate::response::{APPLICATION_JSON, ErrorPayload, JsonPayload};
use crate::types::{Handler, Request, Response};

/// Serializes the [`JsonPayload`] a handler left in the response extensions into the
/// body and marks the response as JSON. An error payload also sets the status code.
/// Responses without a payload keep their body.
pub fn json_encoder() -> Middleware {
    Arc::new(|next: Handler| -> Handler {
        Arc::new(move |req: Request| {
            let mut response = next(req);
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));

            let Some(payload) = response.extensions_mut().remove::<JsonPayload>() else {
                return response;
            };

            if let Some(status) = payload.status() {
                *response.status_mut() = status;
            }

            let encoded = match &payload {
                JsonPayload::Value(value) => serde_json::to_vec(value),
                JsonPayload::Error(err) => serde_json::to_vec(err),
            };
            match encoded {
                Ok(mut body) => {
                    body.push(b'\n');
                    *response.body_mut() = Bytes::from(body);
                }
                Err(err) => encoding_failure(&mut response, &err),
            }
            response
        })
    })
}

fn encoding_failure(response: &mut Response, err: &serde_json::Error) {
    tracing::event!(tracing::Level::ERROR, error = %err, "failed to encode response payload");

    let status = StatusCode::INTERNAL_SERVER_ERROR;
    let fallback = ErrorPayload {
        code: status.as_u16(),
        error: err.to_string(),
        message: status
            .canonical_reason()
            .unwrap_or("Internal Server Error")
            .to_string(),
    };
    *response.status_mut() = status;
    *response.body_mut() = serde_json::to_vec(&fallback)
        .map(Bytes::from)
        .unwrap_or_default();
}
