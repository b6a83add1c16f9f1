use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Used when no database is configured, and by the integration tests.
/// Email uniqueness matches the `users_email_key` constraint of the
/// PostgreSQL schema.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.id != user.id && u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        let stored = users
            .get_mut(&user.id)
            .ok_or_else(|| UserError::NotFound(user.id.to_string()))?;
        stored.name = user.name.clone();
        stored.email = user.email.clone();
        stored.updated_at = user.updated_at;

        Ok(stored.clone())
    }

    async fn update_password(&self, id: &UserId, password_hash: String) -> Result<(), UserError> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        user.password_hash = password_hash;
        user.updated_at = Utc::now();

        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserName;

    fn user(email: &str) -> User {
        User {
            id: UserId::new(),
            name: UserName::new("Test User".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repository = InMemoryUserRepository::new();
        let created = repository.create(user("a@example.com")).await.unwrap();

        let by_id = repository.find_by_id(&created.id).await.unwrap();
        assert_eq!(by_id, Some(created.clone()));

        let by_email = repository.find_by_email("a@example.com").await.unwrap();
        assert_eq!(by_email, Some(created));

        assert_eq!(repository.find_by_email("b@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let repository = InMemoryUserRepository::new();
        repository.create(user("a@example.com")).await.unwrap();

        let result = repository.create(user("a@example.com")).await;
        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_update_profile() {
        let repository = InMemoryUserRepository::new();
        let created = repository.create(user("a@example.com")).await.unwrap();
        repository.create(user("b@example.com")).await.unwrap();

        let mut changed = created.clone();
        changed.email = EmailAddress::new("b@example.com".to_string()).unwrap();
        assert!(matches!(
            repository.update(changed.clone()).await,
            Err(UserError::EmailAlreadyExists(_))
        ));

        changed.email = EmailAddress::new("c@example.com".to_string()).unwrap();
        changed.name = UserName::new("Renamed".to_string()).unwrap();
        let updated = repository.update(changed).await.unwrap();
        assert_eq!(updated.name.as_str(), "Renamed");
        assert_eq!(updated.password_hash, created.password_hash);
        assert!(repository.find_by_email("a@example.com").await.unwrap().is_none());

        // Keeping one's own email is not a conflict
        assert!(repository.update(updated.clone()).await.is_ok());

        let missing = user("d@example.com");
        assert!(matches!(
            repository.update(missing).await,
            Err(UserError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_password_and_delete() {
        let repository = InMemoryUserRepository::new();
        let created = repository.create(user("a@example.com")).await.unwrap();

        repository
            .update_password(&created.id, "$argon2id$new_hash".to_string())
            .await
            .unwrap();
        let updated = repository.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(updated.password_hash, "$argon2id$new_hash");

        repository.delete(&created.id).await.unwrap();
        assert_eq!(repository.find_by_id(&created.id).await.unwrap(), None);

        assert!(matches!(
            repository.delete(&created.id).await,
            Err(UserError::NotFound(_))
        ));
        assert!(matches!(
            repository
                .update_password(&created.id, "x".to_string())
                .await,
            Err(UserError::NotFound(_))
        ));
    }
}
