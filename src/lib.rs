//! # Portside
//!
//! An early-stage scaffold for a hexagonal-architecture backend service,
//! with a built-in dependency injection container.
//!
//! ## Features
//!
//! - **Dependency Injection**: name-keyed container with lazy singleton
//!   construction, safe under concurrent first access
//! - **Field Injection**: `#[derive(Injectable)]` with `#[inject("name")]`
//!   markers for populating composition-root structs from the container
//! - **Ports & Adapters**: generic repository ports over swappable storage
//!   adapters (in-memory placeholder included)
//! - **HTTP Entrypoint**: Axum router with CORS and request tracing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portside::adapters::memory::InMemoryAccountRepository;
//! use portside::domain::repositories::AccountRepository;
//! use portside::prelude::*;
//!
//! #[derive(Default, Injectable)]
//! struct AppServices {
//!     #[inject("accountService")]
//!     accounts: Option<Arc<AccountService>>,
//! }
//!
//! fn main() -> Result<()> {
//!     let container = Container::new();
//!
//!     // Providers are nullary; nested dependencies are captured, not
//!     // resolved re-entrantly.
//!     let repository: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountRepository::new());
//!     container.register("accountService", move || {
//!         AccountService::new(Arc::clone(&repository))
//!     });
//!
//!     let mut services = AppServices::default();
//!     container.resolve_into(&mut services)?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod di;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod server;

// Re-export core types
pub use di::{Container, ContainerBuilder, Injectable, InjectionPoint, InjectionSlot, ServiceRef};
pub use error::{PortsideError, Result};

// Re-export macros
pub use portside_macro::Injectable as DeriveInjectable;

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use portside::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigService, ServerConfig};
    pub use crate::di::{Container, ContainerBuilder, Injectable, ServiceRef};
    pub use crate::domain::services::{AccountService, NotificationService};
    pub use crate::error::{PortsideError, Result};
    pub use crate::middleware::{CorsConfig, CorsLayer};
    pub use crate::server::{shutdown_signal, AppState};
    pub use crate::DeriveInjectable as Injectable;
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
