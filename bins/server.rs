use std::process::ExitCode;

use configs::AppConfig;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Resolves on the first Ctrl+C; the server then stops accepting and drains.
async fn shutdown_signal(service_id: Uuid) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(%service_id, error = %e, "ctrl_c listener failed; shutdown only on server exit");
        std::future::pending::<()>().await;
    }
    info!(%service_id, event = "shutdown_signal", "received Ctrl+C, draining connections");
}

fn build_runtime(cfg: &AppConfig) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = cfg.server.worker_threads {
        builder.worker_threads(threads);
    }
    builder.build()
}

fn main() -> ExitCode {
    // .env before the subscriber so RUST_LOG and LOG_FORMAT apply
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let service_id = Uuid::new_v4();
    std::panic::set_hook(Box::new(move |info| {
        error!(%service_id, event = "panic", message = %info, "unhandled panic");
    }));

    let cfg = match AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(%service_id, event = "config_invalid", error = %e, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };

    let rt = match build_runtime(&cfg) {
        Ok(rt) => rt,
        Err(e) => {
            error!(%service_id, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        %service_id,
        event = "start",
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        backend = ?cfg.storage.backend,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "catalog starting"
    );

    match rt.block_on(server::run(cfg, shutdown_signal(service_id))) {
        Ok(()) => {
            info!(%service_id, event = "stop", "catalog stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(%service_id, event = "run_failed", error = %e, "catalog exited with error");
            ExitCode::FAILURE
        }
    }
}
