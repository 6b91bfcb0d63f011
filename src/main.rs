use std::sync::Arc;

mod api;
mod config;
mod data;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config file path without extension, default "config" (config.toml)
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Tokio runtime sized by the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    // Tables are built once here and only read afterwards
    let state = Arc::new(config::AppState::new(&cfg, data::Dataset::seeded()));
    logger::log_server_start(&listener.local_addr()?, &state);

    server::run_server_loop(listener, state, server::shutdown_signal()).await;
    logger::log_info("Server stopped");
    Ok(())
}
