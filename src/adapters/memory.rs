//! In-memory repository adapters.
//!
//! Placeholder secondary adapters so the scaffold runs end to end; a real
//! storage backend plugs in behind the same ports.

use crate::domain::entities::{Account, Notification};
use crate::domain::repositories::{AccountRepository, NotificationRepository, Repository};
use crate::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryAccountRepository {
    rows: DashMap<Uuid, Account>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Account> for InMemoryAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Account>> {
        Ok(self.rows.iter().map(|row| row.value().clone()).collect())
    }

    async fn save(&self, entity: &Account) -> Result<()> {
        self.rows.insert(entity.id, entity.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.rows.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.value().email == email)
            .map(|row| row.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Account>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.value().name == name)
            .map(|row| row.value().clone())
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    rows: DashMap<Uuid, Notification>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Notification> for InMemoryNotificationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Notification>> {
        Ok(self.rows.iter().map(|row| row.value().clone()).collect())
    }

    async fn save(&self, entity: &Notification) -> Result<()> {
        self.rows.insert(entity.id, entity.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.rows.remove(&id);
        Ok(())
    }
}

impl NotificationRepository for InMemoryNotificationRepository {}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn base_repository_roundtrip() {
        let repository = InMemoryAccountRepository::new();
        let account = Account::new("ada@example.com", "Ada");

        repository.save(&account).await.unwrap();
        let found = repository.find_by_id(account.id).await.unwrap().unwrap();
        assert_eq!(found.email, "ada@example.com");
        assert_eq!(repository.find_all().await.unwrap().len(), 1);

        repository.delete(account.id).await.unwrap();
        assert!(repository.find_by_id(account.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn finds_accounts_by_email_and_name() {
        let repository = InMemoryAccountRepository::new();
        repository
            .save(&Account::new("ada@example.com", "Ada"))
            .await
            .unwrap();
        repository
            .save(&Account::new("grace@example.com", "Grace"))
            .await
            .unwrap();

        let by_email = repository
            .find_by_email("grace@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.name, "Grace");

        assert_eq!(repository.find_by_name("Ada").await.unwrap().len(), 1);
        assert!(repository.find_by_name("Alan").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn stores_notifications() {
        let repository = InMemoryNotificationRepository::new();
        let notification = Notification::new(Uuid::new_v4(), "welcome", "hello");

        repository.save(&notification).await.unwrap();
        assert_eq!(repository.find_all().await.unwrap().len(), 1);
    }
}
