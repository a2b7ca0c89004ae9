use std::sync::Arc;

use protobuf_msg_reader::config::Config;
use protobuf_msg_reader::handler::Router;
use protobuf_msg_reader::{logger, server};

fn main() {
    if let Err(e) = run() {
        logger::log_fatal(&format!("Server failed to start: {e}"));
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    // Worker count comes from config, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    logger::log_server_start(&listener.local_addr()?, &cfg);

    let router = Arc::new(Router::new(Arc::new(cfg)));
    server::serve(listener, router, server::shutdown_signal()).await;

    logger::log_info("Server stopped");
    Ok(())
}
