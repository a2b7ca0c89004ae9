//! HTTP response building module
//!
//! Builders for every status the gateway emits. Builder failures are logged
//! and degrade to an empty response instead of panicking.

use hyper::header::{
    ACCEPT_RANGES, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, LAST_MODIFIED, LOCATION,
};
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::body::{empty_body, full_body, GatewayBody};
use super::range::ByteRange;
use super::GatewayResponse;

/// Body of the health endpoint, serialized in field order
#[derive(Debug, Serialize)]
struct HealthStatus<'a> {
    status: &'a str,
    service: &'a str,
}

/// Build the fixed health payload, e.g. `{"status":"ok","service":"name"}`
pub fn build_health_response(service: &str) -> GatewayResponse {
    let payload = HealthStatus {
        status: "ok",
        service,
    };
    let body = serde_json::to_vec(&payload).unwrap_or_else(|e| {
        log_build_error("health", &e);
        br#"{"status":"ok"}"#.to_vec()
    });

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/json")
        .body(full_body(body))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(empty_body())
        })
}

/// Plain-text error response, e.g. `404 page not found` or `403 Forbidden`
pub fn build_error_response(status: StatusCode) -> GatewayResponse {
    let text = if status == StatusCode::NOT_FOUND {
        "404 page not found\n".to_string()
    } else {
        format!(
            "{} {}\n",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error")
        )
    };

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(full_body(text))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(empty_body())
        })
}

/// Build 301 redirect response
pub fn build_redirect_response(location: &str) -> GatewayResponse {
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(LOCATION, location)
        .body(empty_body())
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(empty_body())
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(last_modified: &str) -> GatewayResponse {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header(LAST_MODIFIED, last_modified)
        .body(empty_body())
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(empty_body())
        })
}

/// Build 416 Range Not Satisfiable response
pub fn build_416_response(file_size: u64) -> GatewayResponse {
    Response::builder()
        .status(StatusCode::RANGE_NOT_SATISFIABLE)
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(CONTENT_RANGE, format!("bytes */{file_size}"))
        .body(full_body("416 Range Not Satisfiable\n"))
        .unwrap_or_else(|e| {
            log_build_error("416", &e);
            Response::new(empty_body())
        })
}

/// Build 200 response for a whole file of `content_length` bytes
///
/// `body` is empty for HEAD requests; the length header still describes the
/// file.
pub fn build_file_response(
    body: GatewayBody,
    content_length: u64,
    content_type: &str,
    last_modified: Option<&str>,
) -> GatewayResponse {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, content_length)
        .header(ACCEPT_RANGES, "bytes");
    if let Some(lm) = last_modified {
        builder = builder.header(LAST_MODIFIED, lm);
    }

    builder.body(body).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(empty_body())
    })
}

/// Build 206 Partial Content response for `range` of a `total_size` file
pub fn build_partial_response(
    body: GatewayBody,
    range: ByteRange,
    total_size: u64,
    content_type: &str,
    last_modified: Option<&str>,
) -> GatewayResponse {
    let mut builder = Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, range.byte_count())
        .header(CONTENT_RANGE, range.content_range(total_size))
        .header(ACCEPT_RANGES, "bytes");
    if let Some(lm) = last_modified {
        builder = builder.header(LAST_MODIFIED, lm);
    }

    builder.body(body).unwrap_or_else(|e| {
        log_build_error("206", &e);
        Response::new(empty_body())
    })
}

/// Build generic HTML response
pub fn build_html_response(content: String, is_head: bool) -> GatewayResponse {
    let length = content.len() as u64;
    let body = if is_head {
        empty_body()
    } else {
        full_body(content)
    };
    build_file_response(body, length, "text/html; charset=utf-8", None)
}

/// Log response build error
fn log_build_error(status: &str, error: &impl std::fmt::Display) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
