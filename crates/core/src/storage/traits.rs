use async_trait::async_trait;

use crate::user::User;

use super::Result;

/// Storage contract for user records.
///
/// All operations target a single table keyed by the user id. Writes are
/// unconditional: `save` overwrites, `update` upserts and `delete` succeeds
/// whether or not the key exists.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every stored user, in the order the backend yields them.
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Gets a user by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Writes the full record, replacing any existing one with the same id.
    async fn save(&self, user: &User) -> Result<()>;

    /// Sets `name` and `email` on the record keyed by `user.id`.
    async fn update(&self, user: &User) -> Result<()>;

    /// Deletes a user by id.
    async fn delete(&self, id: &str) -> Result<()>;
}
