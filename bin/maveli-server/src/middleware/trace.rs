//! Per-request tracing: one span per request carrying a trace ID,
//! with request/response body logging for small JSON payloads.

use std::time::Instant;

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

pub static X_TRACE_ID: &str = "x-trace-id";

pub async fn trace_middleware(req: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();

    // Reuse the caller's trace ID when it is a valid UUID, otherwise mint one.
    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %method,
        path = %path,
    );

    async move {
        info!("→ request started");
        let (parts, body) = req.into_parts();

        let req_bytes = buffer_and_log("request", &trace_id.to_string(), &parts.headers, body).await;
        let mut req = Request::from_parts(parts, Body::from(req_bytes));

        if let Ok(value) = trace_id.to_string().parse() {
            req.headers_mut().insert(X_TRACE_ID, value);
        }

        let response = next.run(req).await;

        let (parts, body) = response.into_parts();
        let res_bytes = buffer_and_log("response", &trace_id.to_string(), &parts.headers, body).await;
        let mut response = Response::from_parts(parts, Body::from(res_bytes));

        let latency = start_time.elapsed();

        if let Ok(value) = trace_id.to_string().parse() {
            response.headers_mut().insert(X_TRACE_ID, value);
        }

        info!(
            status = response.status().as_u16(),
            latency_ms = latency.as_millis(),
            "← response finished"
        );

        response
    }
    .instrument(span)
    .await
}

/// Buffer the body; log it when it is small JSON, otherwise log a summary.
async fn buffer_and_log(
    direction: &str,
    trace_id: &str,
    headers: &header::HeaderMap,
    body: Body,
) -> Bytes {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let is_json = content_type.contains("application/json");

    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return Bytes::new(),
    };

    if is_json && bytes.len() < 1024 {
        if let Ok(text) = std::str::from_utf8(&bytes) {
            info!(id = %trace_id, "{} Body: {}", direction, text);
        }
    } else if !bytes.is_empty() {
        info!(id = %trace_id, "{} Body: [Skipped: Type={}, Size={}]", direction, content_type, bytes.len());
    }

    bytes
}
