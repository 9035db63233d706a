use std::sync::Arc;
use std::time::Instant;

use super::Middleware;
use crate::types::{Handler, Request};

/// Logs request acceptance before the inner handler and the elapsed time after it.
pub fn timer() -> Middleware {
    Arc::new(|next: Handler| -> Handler {
        Arc::new(move |req: Request| {
            let start = Instant::now();
            let uri = req.uri().path().to_string();
            tracing::event!(tracing::Level::TRACE, uri = %uri, "accepted request");

            let response = next(req);

            let elapsed = start.elapsed();
            tracing::event!(
                tracing::Level::TRACE,
                uri = %uri,
                elapsed_us = elapsed.as_micros() as u64,
                elapsed = ?elapsed,
                "request completed"
            );
            response
        })
    })
}
