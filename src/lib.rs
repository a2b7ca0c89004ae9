//! Static file gateway for the protobuf message reader front end.
//!
//! Serves a directory over HTTP/1.1, maps `/` to the index document, adds
//! permissive CORS headers to file responses and answers `/health` with a
//! fixed JSON payload.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
