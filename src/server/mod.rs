use crate::domain::entities::Account;
use crate::domain::services::{AccountService, NotificationService};
use crate::error::{PortsideError, Result};
use crate::middleware::CorsLayer;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "Portside";

/// State handed to the router: the resolved service graph, with explicitly
/// typed fields. Built once at the composition root.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub notifications: Arc<NotificationService>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/accounts", post(create_account))
        .route("/accounts/{email}", get(get_account))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::default())
        .with_state(state)
}

async fn welcome() -> String {
    format!("Welcome to {SERVICE_NAME}")
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub name: String,
}

async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<Json<Account>> {
    let account = state
        .accounts
        .register(&request.email, &request.name)
        .await?;
    Ok(Json(account))
}

async fn get_account(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Account>> {
    state
        .accounts
        .find_by_email(&email)
        .await?
        .map(Json)
        .ok_or_else(|| PortsideError::NotFound {
            resource: format!("account {email}"),
        })
}

/// Create a future that completes when a shutdown signal is received
///
/// Pass it to `axum::serve(...).with_graceful_shutdown`.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAccountRepository, InMemoryNotificationRepository};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState {
            accounts: Arc::new(AccountService::new(Arc::new(
                InMemoryAccountRepository::new(),
            ))),
            notifications: Arc::new(NotificationService::new(Arc::new(
                InMemoryNotificationRepository::new(),
            ))),
        }
    }

    #[tokio::test]
    async fn serves_the_welcome_banner() {
        let response = router(state())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Welcome to Portside");
    }

    #[tokio::test]
    async fn reports_health() {
        let response = router(state())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_account_is_a_404() {
        let response = router(state())
            .oneshot(
                Request::builder()
                    .uri("/accounts/nobody@example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn creates_then_fetches_an_account() {
        let app = router(state());

        let created = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/accounts")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"email": "ada@example.com", "name": "Ada"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::OK);

        let fetched = app
            .oneshot(
                Request::builder()
                    .uri("/accounts/ada@example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::OK);

        let body = axum::body::to_bytes(fetched.into_body(), usize::MAX)
            .await
            .unwrap();
        let account: Account = serde_json::from_slice(&body).unwrap();
        assert_eq!(account.name, "Ada");
    }
}
