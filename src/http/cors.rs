//! Cross-origin header injection

use hyper::header::{
    HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};

use super::GatewayResponse;
use crate::config::CorsConfig;
use crate::logger;

/// Attach the configured `Access-Control-Allow-*` headers to a response
pub fn apply_cors_headers(response: &mut GatewayResponse, cors: &CorsConfig) {
    let headers = [
        (ACCESS_CONTROL_ALLOW_ORIGIN, &cors.allow_origin),
        (ACCESS_CONTROL_ALLOW_METHODS, &cors.allow_methods),
        (ACCESS_CONTROL_ALLOW_HEADERS, &cors.allow_headers),
    ];

    for (name, value) in headers {
        insert_header(response, name, value);
    }
}

fn insert_header(response: &mut GatewayResponse, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(v) => {
            response.headers_mut().insert(name, v);
        }
        Err(e) => logger::log_warning(&format!("Invalid CORS header {name}: '{value}' ({e})")),
    }
}
