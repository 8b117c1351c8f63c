//! HTTP server lifecycle: wiring, idle sweep and graceful shutdown.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use crate::adapters::http::{build_app, MatrixAppState};
use crate::adapters::memory::InMemoryWizardRepository;
use crate::application::handlers::matrix::PurgeIdleWizardsHandler;
use crate::config::{AppConfig, WizardConfig};
use crate::domain::foundation::Timestamp;
use crate::ports::WizardRepository;

/// Runs the API until Ctrl-C or SIGTERM.
pub async fn run(config: AppConfig) -> Result<()> {
    let repository: Arc<dyn WizardRepository> =
        Arc::new(InMemoryWizardRepository::new(config.wizard.max_sessions));
    let sweeper = spawn_idle_purge(repository.clone(), &config.wizard);

    let app = build_app(MatrixAppState::new(repository), &config.server);
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", addr))?;

    info!(
        %addr,
        environment = ?config.server.environment,
        session_ttl_secs = config.wizard.session_ttl_secs,
        max_sessions = config.wizard.max_sessions,
        "FBA decision matrix listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    sweeper.abort();
    info!("server stopped");
    Ok(())
}

/// Periodically drops wizards idle for longer than the configured TTL.
pub fn spawn_idle_purge(
    repository: Arc<dyn WizardRepository>,
    config: &WizardConfig,
) -> JoinHandle<()> {
    let handler = PurgeIdleWizardsHandler::new(repository, config.session_ttl_secs);
    let period = config.purge_interval();

    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(err) = handler.handle(Timestamp::now()).await {
                error!(error = %err, "idle wizard purge failed");
            }
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
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
    info!("shutdown signal received");
}
