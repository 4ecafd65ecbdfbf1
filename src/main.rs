//! Scrum Poker server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;

use scrum_poker::adapters::{
    app_router, InMemorySessionStore, SessionHandlers, SessionSweeper, SweeperConfig,
};
use scrum_poker::config::AppConfig;
use scrum_poker::ports::SessionStore;
use scrum_poker::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server)?;

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = SessionSweeper::with_config(
        store.clone(),
        SweeperConfig::default()
            .with_interval(config.sessions.sweep_interval())
            .with_max_lifetime(config.sessions.max_lifetime()),
    );
    let sweeper_task = tokio::spawn(async move { sweeper.run(shutdown_rx).await });

    let app = app_router(SessionHandlers::new(store.clone()), &config.server);
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, static_dir = %config.server.static_dir, "Scrum Poker listening");

    // Stops accepting on the signal, then gives in-flight requests a bounded drain.
    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = drain_tx.send(());
    });
    let shutdown_timeout = config.server.shutdown_timeout();
    let mut server_task = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server_task => result??,
        _ = drain_rx => {
            tracing::info!(timeout = ?shutdown_timeout, "Draining in-flight requests");
            match tokio::time::timeout(shutdown_timeout, &mut server_task).await {
                Ok(result) => result??,
                Err(_) => {
                    tracing::warn!("Shutdown timeout elapsed, abandoning open connections");
                    server_task.abort();
                }
            }
        }
    }

    let _ = shutdown_tx.send(true);
    if let Err(e) = sweeper_task.await {
        tracing::error!(error = %e, "Session sweeper task failed");
    }
    tracing::info!(sessions = store.len(), "Scrum Poker stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
