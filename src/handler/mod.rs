//! Request handler module
//!
//! Route classification, path confinement and static file serving.

pub mod listing;
pub mod path;
pub mod router;
pub mod static_files;

// Re-export main entry points
pub use router::{handle_request, Router};
