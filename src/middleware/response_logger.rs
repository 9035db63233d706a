use std::sync::Arc;
use std::time::Instant;

use super::Middleware;
use crate::types::{Handler, Request};

/// Logs status, headers and body of the response produced by the inner handler.
///
/// Responses are plain values, so the inner response is already fully buffered when it
/// is logged; it is passed on untouched.
pub fn response_logger() -> Middleware {
    Arc::new(|next: Handler| -> Handler {
        Arc::new(move |req: Request| {
            let start = Instant::now();
            let response = next(req);

            let headers: Vec<(&str, &str)> = response
                .headers()
                .iter()
                .map(|(name, value)| (name.as_str(), value.to_str().unwrap_or("<binary>")))
                .collect();
            tracing::event!(
                tracing::Level::DEBUG,
                kind = "response",
                status = response.status().as_u16(),
                headers = ?headers,
                body = %String::from_utf8_lossy(response.body()),
                elapsed_us = start.elapsed().as_micros() as u64
            );

            response
        })
    })
}
