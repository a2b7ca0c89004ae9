// Connection handling module
// Serves one accepted TCP connection on its own task

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::handler::{self, Router};
use crate::logger;

/// Spawn a task serving HTTP/1.1 on `stream` until the client disconnects
///
/// When `performance.connection_timeout` is non-zero the whole connection is
/// bounded by it.
pub fn handle_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, router: Arc<Router>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let performance = router.config().performance.clone();

        let mut builder = http1::Builder::new();
        builder.keep_alive(performance.keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&router), peer_addr)),
        );

        if performance.connection_timeout == 0 {
            if let Err(err) = conn.await {
                logger::log_connection_error(&err);
            }
            return;
        }

        let limit = Duration::from_secs(performance.connection_timeout);
        match tokio::time::timeout(limit, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => logger::log_warning(&format!(
                "Connection from {peer_addr} timed out after {} seconds",
                limit.as_secs()
            )),
        }
    });
}
