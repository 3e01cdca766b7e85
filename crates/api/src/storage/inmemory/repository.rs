//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use users_core::storage::{Result, UserRepository};
use users_core::user::User;

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        let stored = users
            .entry(user.id.clone())
            .or_insert_with(|| User::default().with_id(user.id.clone()));
        stored.name = user.name.clone();
        stored.email = user.email.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut users = self.users.write().await;
        users.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryRepository::new();
        let user = User::new("1", "John", "john@example.com");

        repo.save(&user).await.unwrap();

        assert_eq!(repo.find_by_id("1").await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_find_by_id_nonexistent() {
        let repo = InMemoryRepository::new();
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_existing() {
        let repo = InMemoryRepository::with_users([User::new("1", "John", "john@example.com")]);

        repo.save(&User::new("1", "Johnny", "johnny@example.com"))
            .await
            .unwrap();

        let stored = repo.find_by_id("1").await.unwrap().unwrap();
        assert_eq!(stored.name, "Johnny");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let repo = InMemoryRepository::with_users([User::new("1", "John", "john@example.com")]);

        repo.update(&User::new("1", "Jane", "jane@example.com"))
            .await
            .unwrap();

        assert_eq!(
            repo.find_by_id("1").await.unwrap(),
            Some(User::new("1", "Jane", "jane@example.com"))
        );
    }

    #[tokio::test]
    async fn test_update_nonexistent_creates_item() {
        let repo = InMemoryRepository::new();

        repo.update(&User::new("9", "Ghost", "ghost@example.com"))
            .await
            .unwrap();

        assert_eq!(
            repo.find_by_id("9").await.unwrap(),
            Some(User::new("9", "Ghost", "ghost@example.com"))
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::with_users([User::new("1", "John", "john@example.com")]);

        repo.delete("1").await.unwrap();

        assert!(repo.find_by_id("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_ok() {
        let repo = InMemoryRepository::new();
        assert!(repo.delete("missing").await.is_ok());
    }
}
