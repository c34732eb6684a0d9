use anyhow::Context;
use portside::adapters::memory::{InMemoryAccountRepository, InMemoryNotificationRepository};
use portside::config::{ConfigService, ServerConfig};
use portside::di::Container;
use portside::domain::repositories::{AccountRepository, NotificationRepository};
use portside::domain::services::{AccountService, NotificationService};
use portside::server::{self, AppState, SERVICE_NAME};
use portside::DeriveInjectable as Injectable;
use std::sync::Arc;

/// Composition root: every service the HTTP surface needs, resolved from
/// the container by name during startup.
#[derive(Default, Injectable)]
struct AppServices {
    #[inject("accountService")]
    accounts: Option<Arc<AccountService>>,
    #[inject("notificationService")]
    notifications: Option<Arc<NotificationService>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting {SERVICE_NAME}...");

    let config = ConfigService::new();
    let server_config = ServerConfig::load(&config);

    // Adapters first: providers are nullary, so nested dependencies are
    // captured by the provider closures rather than resolved re-entrantly
    let accounts: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountRepository::new());
    let notifications: Arc<dyn NotificationRepository> =
        Arc::new(InMemoryNotificationRepository::new());

    let container = Container::new();
    container.register("accountService", {
        let repository = Arc::clone(&accounts);
        move || AccountService::new(Arc::clone(&repository))
    });
    container.register("notificationService", {
        let repository = Arc::clone(&notifications);
        move || NotificationService::new(Arc::clone(&repository))
    });

    // A hole in the service graph is fatal before we serve traffic
    let mut services = AppServices::default();
    container
        .resolve_into(&mut services)
        .context("service graph is incomplete")?;

    let state = AppState {
        accounts: services.accounts.context("accountService not injected")?,
        notifications: services
            .notifications
            .context("notificationService not injected")?,
    };

    let router = server::router(state);

    let addr = server_config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("{SERVICE_NAME} listening on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("{SERVICE_NAME} stopped");
    Ok(())
}
