//! HTTP protocol layer module
//!
//! Protocol-level building blocks (status responses, bodies, content types,
//! ranges, dates) kept apart from the routing decisions in `handler`.

pub mod body;
pub mod cors;
pub mod date;
pub mod mime;
pub mod range;
pub mod response;

use hyper::Response;

pub use body::{empty_body, full_body, FileBody, GatewayBody};

/// Response type produced by every handler
pub type GatewayResponse = Response<GatewayBody>;

// Re-export commonly used items
pub use cors::apply_cors_headers;
pub use range::{parse_range_header, RangeParseResult};
pub use response::{
    build_304_response, build_416_response, build_error_response, build_health_response,
    build_redirect_response,
};
