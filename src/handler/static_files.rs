//! Static file serving module
//!
//! Resolves request segments inside the root directory and builds file
//! responses (conditional, ranged, or whole).

use crate::handler::router::RequestContext;
use crate::http::{self, date, mime, FileBody, GatewayBody, RangeParseResult};
use crate::logger;
use hyper::StatusCode;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What a request path resolved to
#[derive(Debug)]
pub enum Target {
    File { path: PathBuf, metadata: Metadata },
    Directory { path: PathBuf },
}

/// Why a request path could not be served
#[derive(Debug)]
pub enum ResolveError {
    NotFound,
    Forbidden,
    Io(io::Error),
}

impl From<io::Error> for ResolveError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::Forbidden,
            _ => Self::Io(err),
        }
    }
}

impl ResolveError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Resolve normalised segments against `root`
///
/// The joined path is canonicalised so symlinks are followed, then checked to
/// still lie under the canonical root.
pub async fn resolve(root: &Path, segments: &[&str]) -> Result<Target, ResolveError> {
    let root_canonical = fs::canonicalize(root).await.map_err(|e| {
        logger::log_warning(&format!(
            "Static directory not found or inaccessible '{}': {e}",
            root.display()
        ));
        ResolveError::from(e)
    })?;

    let candidate = segments
        .iter()
        .fold(root_canonical.clone(), |path, segment| path.join(segment));

    // File not found is common (404), no need to log
    let canonical = fs::canonicalize(&candidate).await?;
    if !canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            candidate.display(),
            canonical.display()
        ));
        return Err(ResolveError::NotFound);
    }

    let metadata = fs::metadata(&canonical).await?;
    if metadata.is_dir() {
        Ok(Target::Directory { path: canonical })
    } else if metadata.is_file() {
        Ok(Target::File {
            path: canonical,
            metadata,
        })
    } else {
        Err(ResolveError::NotFound)
    }
}

/// Serve a resolved regular file
///
/// The file is opened before any validator or range is evaluated so read
/// failures surface as 403/500 rather than a body error mid-stream. Bodies are
/// streamed from disk; only `metadata.len()` is used for sizes.
pub async fn serve_file(
    ctx: &RequestContext<'_>,
    path: &Path,
    metadata: &Metadata,
) -> http::GatewayResponse {
    let file = match fs::File::open(path).await {
        Ok(file) => file,
        Err(e) => return read_error_response(path, e),
    };

    let modified = metadata.modified().ok();
    let last_modified = modified.map(date::format_http_date);

    if ctx.conditional {
        if let (Some(m), Some(lm)) = (modified, last_modified.as_deref()) {
            if date::is_not_modified(ctx.if_modified_since, m) {
                return http::build_304_response(lm);
            }
        }
    }

    let size = metadata.len();
    let content_type = mime::content_type_for(path);

    match http::parse_range_header(ctx.range, size) {
        RangeParseResult::Valid(range) => {
            let body = match stream_body(ctx, file, range.start, range.byte_count()).await {
                Ok(body) => body,
                Err(e) => return read_error_response(path, e),
            };
            http::response::build_partial_response(
                body,
                range,
                size,
                content_type,
                last_modified.as_deref(),
            )
        }
        RangeParseResult::NotSatisfiable => http::build_416_response(size),
        RangeParseResult::None => {
            let body = match stream_body(ctx, file, 0, size).await {
                Ok(body) => body,
                Err(e) => return read_error_response(path, e),
            };
            http::response::build_file_response(
                body,
                size,
                content_type,
                last_modified.as_deref(),
            )
        }
    }
}

/// Body for `len` bytes from `start`, or nothing for HEAD
async fn stream_body(
    ctx: &RequestContext<'_>,
    file: fs::File,
    start: u64,
    len: u64,
) -> io::Result<GatewayBody> {
    if ctx.is_head {
        return Ok(http::empty_body());
    }
    Ok(FileBody::open(file, start, len).await?.boxed())
}

/// Serve an HTML listing of a directory
pub async fn serve_listing(ctx: &RequestContext<'_>, dir: &Path) -> http::GatewayResponse {
    match super::listing::render_listing(dir).await {
        Ok(html) => http::response::build_html_response(html, ctx.is_head),
        Err(e) => read_error_response(dir, e),
    }
}

/// Map a failed read to a status response, logging unexpected failures
pub fn read_error_response(path: &Path, err: io::Error) -> http::GatewayResponse {
    let error = ResolveError::from(err);
    match &error {
        ResolveError::Io(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", path.display()));
        }
        ResolveError::Forbidden => {
            logger::log_warning(&format!("Permission denied: '{}'", path.display()));
        }
        ResolveError::NotFound => {}
    }
    http::build_error_response(error.status())
}
