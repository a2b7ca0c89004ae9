//! Request routing module
//!
//! The `Router` is built once at startup and shared by every connection. It
//! classifies each request as health, root document, or static path.

use crate::config::Config;
use crate::handler::{path, static_files};
use crate::handler::static_files::{ResolveError, Target};
use crate::http::{self, GatewayResponse};
use crate::logger::{self, AccessLogEntry, AccessLogFormat};
use hyper::body::Body as _;
use hyper::header::{IF_MODIFIED_SINCE, RANGE, REFERER, USER_AGENT};
use hyper::{HeaderMap, Method, Request, StatusCode, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Request fields the handlers need
pub struct RequestContext<'a> {
    /// Raw (still percent-encoded) path
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    /// Whether `If-Modified-Since` applies (GET and HEAD only)
    pub conditional: bool,
    pub if_modified_since: Option<&'a str>,
    pub range: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn from_request<B>(req: &'a Request<B>) -> Self {
        let method = req.method();
        Self {
            path: req.uri().path(),
            query: req.uri().query(),
            is_head: method == Method::HEAD,
            conditional: method == Method::GET || method == Method::HEAD,
            if_modified_since: header_str(req.headers(), IF_MODIFIED_SINCE.as_str()),
            range: header_str(req.headers(), RANGE.as_str()),
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Explicit route table for the gateway
pub struct Router {
    config: Arc<Config>,
    access_format: AccessLogFormat,
}

impl Router {
    pub fn new(config: Arc<Config>) -> Self {
        let name = config.logging.access_log_format.as_str();
        let access_format = AccessLogFormat::parse(name).unwrap_or_else(|| {
            logger::log_warning(&format!(
                "Unknown access log format '{name}', using 'combined'"
            ));
            AccessLogFormat::Combined
        });
        Self {
            config,
            access_format,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn root_dir(&self) -> &Path {
        Path::new(&self.config.static_files.root_dir)
    }

    /// Produce the response for a request; routing looks at the path only
    ///
    /// The path is percent-decoded once, so `/%68ealth` reaches the health
    /// route just as the file routes would decode it.
    pub async fn route<B>(&self, req: &Request<B>) -> GatewayResponse {
        let ctx = RequestContext::from_request(req);
        let decoded = path::decode_path(ctx.path);

        if decoded.as_deref() == Some(self.config.service.health_path.as_str()) {
            return http::build_health_response(&self.config.service.name);
        }

        let mut response = if ctx.path == "/" {
            self.serve_index(&ctx).await
        } else {
            self.serve_static(&ctx, decoded.as_deref()).await
        };
        http::apply_cors_headers(&mut response, &self.config.http.cors);
        response
    }

    /// `/` always maps to the index document, never to a listing
    async fn serve_index(&self, ctx: &RequestContext<'_>) -> GatewayResponse {
        let index = self.config.static_files.index_file.as_str();
        match static_files::resolve(self.root_dir(), &[index]).await {
            Ok(Target::File { path, metadata }) => {
                static_files::serve_file(ctx, &path, &metadata).await
            }
            Ok(Target::Directory { .. }) => http::build_error_response(StatusCode::NOT_FOUND),
            Err(e) => error_response(&e),
        }
    }

    async fn serve_static(
        &self,
        ctx: &RequestContext<'_>,
        decoded: Option<&str>,
    ) -> GatewayResponse {
        let Some(decoded) = decoded else {
            logger::log_warning(&format!("Malformed request path: {}", ctx.path));
            return http::build_error_response(StatusCode::BAD_REQUEST);
        };
        let segments = path::normalize_segments(decoded);
        let wants_directory = ctx.path.ends_with('/');

        match static_files::resolve(self.root_dir(), &segments).await {
            Ok(Target::File { path, metadata }) => {
                if wants_directory {
                    let target = format!("../{}", last_segment(ctx.path));
                    return http::build_redirect_response(&redirect_target(&target, ctx.query));
                }
                static_files::serve_file(ctx, &path, &metadata).await
            }
            Ok(Target::Directory { path }) => {
                if !wants_directory {
                    let target = format!("./{}/", last_segment(ctx.path));
                    return http::build_redirect_response(&redirect_target(&target, ctx.query));
                }
                self.serve_directory(ctx, &segments, &path).await
            }
            Err(e) => error_response(&e),
        }
    }

    /// Index document if present, otherwise a listing (when enabled)
    async fn serve_directory(
        &self,
        ctx: &RequestContext<'_>,
        segments: &[&str],
        dir: &Path,
    ) -> GatewayResponse {
        let index = self.config.static_files.index_file.as_str();
        let mut index_segments = segments.to_vec();
        index_segments.push(index);

        match static_files::resolve(self.root_dir(), &index_segments).await {
            Ok(Target::File { path, metadata }) => {
                static_files::serve_file(ctx, &path, &metadata).await
            }
            Ok(Target::Directory { .. }) | Err(ResolveError::NotFound) => {
                if self.config.static_files.directory_listing {
                    static_files::serve_listing(ctx, dir).await
                } else {
                    http::build_error_response(StatusCode::NOT_FOUND)
                }
            }
            Err(e) => error_response(&e),
        }
    }
}

/// Final segment of a raw path, ignoring trailing slashes
///
/// Redirects are relative to the request URL, so a path such as
/// `//host.example` can never turn into a protocol-relative `Location`.
fn last_segment(raw_path: &str) -> &str {
    let trimmed = raw_path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

fn redirect_target(path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) => format!("{path}?{q}"),
        None => path.to_string(),
    }
}

fn error_response(error: &ResolveError) -> GatewayResponse {
    if let ResolveError::Io(e) = error {
        logger::log_error(&format!("Failed to resolve request path: {e}"));
    }
    http::build_error_response(error.status())
}

/// Hyper service entry point: route the request and write the access log
///
/// The body is never read, so it is dropped before routing.
pub async fn handle_request<B>(
    req: Request<B>,
    router: Arc<Router>,
    peer_addr: SocketAddr,
) -> Result<GatewayResponse, Infallible> {
    let started = Instant::now();
    let (parts, body) = req.into_parts();
    drop(body);
    let req = Request::from_parts(parts, ());
    let response = router.route(&req).await;

    if router.config.logging.access_log {
        let entry = access_entry(&req, &response, peer_addr, started);
        logger::log_access(&entry, &router.access_format);
    }

    Ok(response)
}

fn access_entry(
    req: &Request<()>,
    response: &GatewayResponse,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer = header_str(req.headers(), REFERER.as_str()).map(ToString::to_string);
    entry.user_agent = header_str(req.headers(), USER_AGENT.as_str()).map(ToString::to_string);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else if version == Version::HTTP_09 {
        "0.9"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handler::test_support::ScratchDir;
    use http_body_util::BodyExt;
    use hyper::body::{Body as _, Bytes};
    use hyper::header::{
        ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_RANGE, CONTENT_TYPE, LAST_MODIFIED, LOCATION,
    };

    const HEALTH_BODY: &str = r#"{"status":"ok","service":"protobuf-msg-reader"}"#;

    fn router_for(scratch: &ScratchDir) -> Router {
        let mut config =
            Config::load_from("does-not-exist/protobuf-msg-reader-router-test", None).unwrap();
        config.static_files.root_dir = scratch.path().to_string_lossy().into_owned();
        config.logging.access_log = false;
        Router::new(Arc::new(config))
    }

    fn get(uri: &str) -> Request<()> {
        Request::builder().uri(uri).body(()).unwrap()
    }

    async fn body_of(resp: GatewayResponse) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_scenario_index_health_missing() {
        let scratch = ScratchDir::new("router-scenario");
        scratch.write("index.html", b"<h1>Hi</h1>");
        let router = router_for(&scratch);

        let resp = router.route(&get("/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_of(resp).await, "<h1>Hi</h1>");

        let resp = router.route(&get("/health")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(body_of(resp).await, HEALTH_BODY);

        let resp = router.route(&get("/missing.txt")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_without_index_is_not_found() {
        let scratch = ScratchDir::new("router-no-index");
        scratch.write("other.html", b"x");
        let router = router_for(&scratch);

        let resp = router.route(&get("/")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_health_ignores_query_and_method() {
        let scratch = ScratchDir::new("router-health");
        let router = router_for(&scratch);

        for _ in 0..3 {
            let resp = router.route(&get("/health?check=1")).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(body_of(resp).await, HEALTH_BODY);
        }

        let post = Request::builder()
            .method(Method::POST)
            .uri("/health")
            .body(())
            .unwrap();
        assert_eq!(body_of(router.route(&post).await).await, HEALTH_BODY);
    }

    #[tokio::test]
    async fn test_health_matches_decoded_path() {
        let scratch = ScratchDir::new("router-health-encoded");
        scratch.write("health", b"shadowed file");
        let router = router_for(&scratch);

        for uri in ["/%68ealth", "/%68%65alth?x=1"] {
            let resp = router.route(&get(uri)).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
            assert!(resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
            assert_eq!(body_of(resp).await, HEALTH_BODY);
        }
    }

    #[tokio::test]
    async fn test_file_bytes_and_content_type() {
        let scratch = ScratchDir::new("router-files");
        let payload: Vec<u8> = (0..=255).collect();
        scratch.write("data/msg.bin", &payload);
        scratch.write("app.js", b"console.log(1)");
        let router = router_for(&scratch);

        let resp = router.route(&get("/data/msg.bin")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/octet-stream");
        assert!(resp.headers().contains_key(LAST_MODIFIED));
        assert_eq!(body_of(resp).await.as_ref(), payload.as_slice());

        let resp = router.route(&get("/app.js")).await;
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/javascript; charset=utf-8");
        assert_eq!(body_of(resp).await, "console.log(1)");
    }

    #[tokio::test]
    async fn test_cors_headers_on_file_routes_only() {
        let scratch = ScratchDir::new("router-cors");
        scratch.write("index.html", b"home");
        scratch.write("a.txt", b"a");
        let router = router_for(&scratch);

        for uri in ["/", "/a.txt", "/missing"] {
            let resp = router.route(&get(uri)).await;
            let headers = resp.headers();
            assert_eq!(headers["access-control-allow-origin"], "*", "{uri}");
            assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
            assert_eq!(headers["access-control-allow-headers"], "Content-Type");
        }

        let resp = router.route(&get("/health")).await;
        assert!(resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn test_any_method_serves_file_and_head_has_no_body() {
        let scratch = ScratchDir::new("router-methods");
        scratch.write("index.html", b"home");
        let router = router_for(&scratch);

        for method in [Method::POST, Method::OPTIONS] {
            let req = Request::builder().method(method).uri("/").body(()).unwrap();
            let resp = router.route(&req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(body_of(resp).await, "home");
        }

        let head = Request::builder()
            .method(Method::HEAD)
            .uri("/")
            .body(())
            .unwrap();
        let resp = router.route(&head).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-length"], "4");
        assert!(body_of(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_traversal_stays_inside_root() {
        let outside = ScratchDir::new("router-outside");
        outside.write("secret.txt", b"secret");
        let scratch = ScratchDir::new("router-traversal");
        scratch.write("secret.txt", b"public");
        let router = router_for(&scratch);

        let outside_name = outside
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        for uri in [
            format!("/../{outside_name}/secret.txt"),
            format!("/%2e%2e/{outside_name}/secret.txt"),
            format!("/..%2f{outside_name}%2fsecret.txt"),
        ] {
            let resp = router.route(&get(&uri)).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }

        // Lexical normalisation keeps ".." pinned at the root
        let resp = router.route(&get("/../secret.txt")).await;
        assert_eq!(body_of(resp).await, "public");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_backslash_file_name_is_served() {
        let scratch = ScratchDir::new("router-backslash");
        scratch.write("a\\b.txt", b"literal");
        let router = router_for(&scratch);

        let resp = router.route(&get("/a%5Cb.txt")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_of(resp).await, "literal");
    }

    #[tokio::test]
    async fn test_malformed_path_is_bad_request() {
        let scratch = ScratchDir::new("router-malformed");
        let router = router_for(&scratch);

        let resp = router.route(&get("/bad%zzpath")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_percent_encoded_name() {
        let scratch = ScratchDir::new("router-encoded");
        scratch.write("my file.txt", b"spaced");
        let router = router_for(&scratch);

        let resp = router.route(&get("/my%20file.txt")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_of(resp).await, "spaced");
    }

    #[tokio::test]
    async fn test_directory_redirect_index_and_listing() {
        let scratch = ScratchDir::new("router-dirs");
        scratch.write("docs/index.html", b"docs home");
        scratch.write("raw/a.proto", b"syntax = \"proto3\";");
        let router = router_for(&scratch);

        let resp = router.route(&get("/docs?tab=1")).await;
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.headers()[LOCATION], "./docs/?tab=1");

        let resp = router.route(&get("/docs/")).await;
        assert_eq!(body_of(resp).await, "docs home");

        let resp = router.route(&get("/raw/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_of(resp).await;
        assert!(std::str::from_utf8(&html)
            .unwrap()
            .contains("<a href=\"a.proto\">a.proto</a>"));

        let resp = router.route(&get("/raw/a.proto/")).await;
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.headers()[LOCATION], "../a.proto");
    }

    #[tokio::test]
    async fn test_directory_redirect_is_never_protocol_relative() {
        let scratch = ScratchDir::new("router-open-redirect");
        scratch.mkdir("evil.example");
        let router = router_for(&scratch);

        for uri in ["//evil.example", "///evil.example"] {
            let resp = router.route(&get(uri)).await;
            assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY, "{uri}");
            let location = resp.headers()[LOCATION].to_str().unwrap();
            assert!(!location.starts_with("//"), "{uri} -> {location}");
            assert_eq!(location, "./evil.example/");
        }
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/docs"), "docs");
        assert_eq!(last_segment("/raw/a.proto/"), "a.proto");
        assert_eq!(last_segment("//evil.example"), "evil.example");
        assert_eq!(last_segment("/a/b%20c"), "b%20c");
    }

    #[tokio::test]
    async fn test_listing_can_be_disabled() {
        let scratch = ScratchDir::new("router-no-listing");
        scratch.write("raw/a.proto", b"x");
        let mut router = router_for(&scratch);
        let mut config = router.config().clone();
        config.static_files.directory_listing = false;
        router = Router::new(Arc::new(config));

        let resp = router.route(&get("/raw/")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_if_modified_since() {
        let scratch = ScratchDir::new("router-conditional");
        scratch.write("a.txt", b"abc");
        let router = router_for(&scratch);

        let first = router.route(&get("/a.txt")).await;
        let last_modified = first.headers()[LAST_MODIFIED].to_str().unwrap().to_string();

        let req = Request::builder()
            .uri("/a.txt")
            .header("if-modified-since", &last_modified)
            .body(())
            .unwrap();
        let resp = router.route(&req).await;
        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
        assert!(body_of(resp).await.is_empty());

        let stale = Request::builder()
            .uri("/a.txt")
            .header("if-modified-since", "Sun, 06 Nov 1994 08:49:37 GMT")
            .body(())
            .unwrap();
        assert_eq!(router.route(&stale).await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_range_requests() {
        let scratch = ScratchDir::new("router-range");
        scratch.write("digits.txt", b"0123456789");
        let router = router_for(&scratch);

        let req = Request::builder()
            .uri("/digits.txt")
            .header("range", "bytes=3-5")
            .body(())
            .unwrap();
        let resp = router.route(&req).await;
        assert_eq!(resp.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(resp.headers()[CONTENT_RANGE], "bytes 3-5/10");
        assert_eq!(body_of(resp).await, "345");

        let req = Request::builder()
            .uri("/digits.txt")
            .header("range", "bytes=50-")
            .body(())
            .unwrap();
        let resp = router.route(&req).await;
        assert_eq!(resp.status(), StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(resp.headers()[CONTENT_RANGE], "bytes */10");
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let head = Request::builder()
            .method(Method::HEAD)
            .uri("/digits.txt")
            .header("range", "bytes=-4")
            .body(())
            .unwrap();
        let resp = router.route(&head).await;
        assert_eq!(resp.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(resp.headers()["content-length"], "4");
        assert_eq!(resp.headers()[CONTENT_RANGE], "bytes 6-9/10");
        assert!(body_of(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_large_file_is_streamed_with_exact_length() {
        let scratch = ScratchDir::new("router-stream");
        let payload: Vec<u8> = (0..300 * 1024).map(|i| (i % 239) as u8).collect();
        scratch.write("dump.bin", &payload);
        let router = router_for(&scratch);

        let resp = router.route(&get("/dump.bin")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()["content-length"],
            payload.len().to_string().as_str()
        );

        let mut body = resp.into_body();
        assert_eq!(body.size_hint().exact(), Some(payload.len() as u64));
        let mut received = Vec::new();
        let mut frames = 0;
        while let Some(frame) = body.frame().await {
            received.extend_from_slice(&frame.unwrap().into_data().unwrap());
            frames += 1;
        }
        assert!(frames > 1);
        assert_eq!(received, payload);
    }

    #[tokio::test]
    async fn test_concurrent_reads_are_identical() {
        let scratch = ScratchDir::new("router-concurrent");
        let payload = vec![b'x'; 64 * 1024];
        scratch.write("big.bin", &payload);
        let router = Arc::new(router_for(&scratch));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let router = Arc::clone(&router);
                tokio::spawn(async move {
                    let resp = router.route(&get("/big.bin")).await;
                    assert_eq!(resp.status(), StatusCode::OK);
                    body_of(resp).await
                })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap().as_ref(), payload.as_slice());
        }
    }

    #[tokio::test]
    async fn test_handle_request_drops_body() {
        let scratch = ScratchDir::new("router-handle");
        scratch.write("index.html", b"home");
        let router = Arc::new(router_for(&scratch));

        let req = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body("ignored payload".to_string())
            .unwrap();
        let peer: SocketAddr = "127.0.0.1:50000".parse().unwrap();
        let resp = handle_request(req, router, peer).await.unwrap();
        assert_eq!(body_of(resp).await, "home");
    }

    #[tokio::test]
    async fn test_bundled_front_end_is_served() {
        let mut config =
            Config::load_from("does-not-exist/protobuf-msg-reader-router-test", None).unwrap();
        config.static_files.root_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/public").to_string();
        let router = Router::new(Arc::new(config));

        let resp = router.route(&get("/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
        let page = body_of(resp).await;
        let page = std::str::from_utf8(&page).unwrap();
        assert!(page.contains("<script src=\"parser.js\"></script>"));
        assert!(page.contains("<script src=\"app.js\"></script>"));

        for uri in ["/app.js", "/parser.js"] {
            let resp = router.route(&get(uri)).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert_eq!(resp.headers()[CONTENT_TYPE], "text/javascript; charset=utf-8");
            assert!(!body_of(resp).await.is_empty());
        }

        let resp = router.route(&get("/style.css")).await;
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/css; charset=utf-8");
    }

    #[test]
    fn test_unknown_access_format_falls_back_to_combined() {
        let scratch = ScratchDir::new("router-access-format");
        let mut config = router_for(&scratch).config().clone();

        config.logging.access_log_format = "$remote_addr $status".to_string();
        let router = Router::new(Arc::new(config.clone()));
        assert_eq!(router.access_format, AccessLogFormat::Combined);

        config.logging.access_log_format = "json".to_string();
        let router = Router::new(Arc::new(config));
        assert_eq!(router.access_format, AccessLogFormat::Json);
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_11), "1.1");
        assert_eq!(version_label(Version::HTTP_2), "2");
    }
}
