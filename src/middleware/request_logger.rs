use http::{Method, StatusCode, header};
use std::sync::Arc;

use super::Middleware;
use crate::response::{APPLICATION_JSON, text_response};
use crate::types::{Handler, Request};

pub const JSON_EXPECTED: &str = "JSON expected";

type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Logs the incoming request. Bodies of POST and PUT requests are logged too; a body
/// declared as JSON that is not a JSON object is answered with `400` without reaching
/// the inner handler.
pub fn request_logger() -> Middleware {
    Arc::new(|next: Handler| -> Handler {
        Arc::new(move |req: Request| {
            let headers: Vec<&str> = req.headers().keys().map(|name| name.as_str()).collect();

            if req.method() == Method::POST || req.method() == Method::PUT {
                if declares_json(&req) {
                    match serde_json::from_slice::<JsonObject>(req.body()) {
                        Ok(body) => tracing::event!(
                            tracing::Level::DEBUG,
                            kind = "request",
                            method = %req.method(),
                            uri = %req.uri().path(),
                            version = ?req.version(),
                            headers = ?headers,
                            body = %serde_json::Value::Object(body)
                        ),
                        Err(err) => {
                            tracing::event!(
                                tracing::Level::DEBUG,
                                kind = "request",
                                method = %req.method(),
                                uri = %req.uri().path(),
                                error = %err,
                                "rejecting malformed JSON body"
                            );
                            return text_response(StatusCode::BAD_REQUEST, JSON_EXPECTED);
                        }
                    }
                } else {
                    tracing::event!(
                        tracing::Level::DEBUG,
                        kind = "request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        version = ?req.version(),
                        headers = ?headers,
                        body = %String::from_utf8_lossy(req.body())
                    );
                }
            } else {
                tracing::event!(
                    tracing::Level::DEBUG,
                    kind = "request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    headers = ?headers
                );
            }

            next(req)
        })
    })
}

/// Media type must be exactly `application/json`; parameters such as `charset` are
/// ignored, suffixed types like `application/json-seq` are not JSON objects.
fn declares_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(APPLICATION_JSON))
}
