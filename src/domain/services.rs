use crate::domain::entities::{Account, Notification};
use crate::domain::repositories::{AccountRepository, NotificationRepository};
use crate::error::Result;
use std::sync::Arc;
use uuid::Uuid;

/// Account operations. Thin delegation over the repository port.
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, email: &str, name: &str) -> Result<Account> {
        let account = Account::new(email, name);
        self.repository.save(&account).await?;
        Ok(account)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        self.repository.find_by_email(email).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Account>> {
        self.repository.find_by_name(name).await
    }
}

/// Notification operations.
pub struct NotificationService {
    repository: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self { repository }
    }

    pub async fn notify(
        &self,
        account_id: Uuid,
        subject: &str,
        body: &str,
    ) -> Result<Notification> {
        let notification = Notification::new(account_id, subject, body);
        self.repository.save(&notification).await?;
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAccountRepository, InMemoryNotificationRepository};

    #[tokio::test]
    async fn registers_and_finds_accounts() {
        let service = AccountService::new(Arc::new(InMemoryAccountRepository::new()));

        let created = service.register("ada@example.com", "Ada").await.unwrap();
        let found = service
            .find_by_email("ada@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.id, created.id);
        assert!(service
            .find_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn sends_notifications() {
        let service = NotificationService::new(Arc::new(InMemoryNotificationRepository::new()));
        let account_id = Uuid::new_v4();

        let sent = service
            .notify(account_id, "welcome", "hello there")
            .await
            .unwrap();

        assert_eq!(sent.account_id, account_id);
        assert_eq!(sent.subject, "welcome");
    }
}
