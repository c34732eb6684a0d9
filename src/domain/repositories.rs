use crate::domain::entities::{Account, Notification};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Base persistence port shared by every entity.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>>;
    async fn find_all(&self) -> Result<Vec<T>>;
    async fn save(&self, entity: &T) -> Result<()>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Account persistence port.
#[async_trait]
pub trait AccountRepository: Repository<Account> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Account>>;
}

/// Notification persistence port. Nothing beyond the base operations yet.
pub trait NotificationRepository: Repository<Notification> {}
