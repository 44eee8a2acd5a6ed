use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::{NewUser, User};

/// Repository trait for User persistence
///
/// Lookups return `Ok(None)` for a missing document; every `Err` is a store
/// failure. Email comparison is exact and case-sensitive. None of the
/// methods enforce uniqueness; that is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: ObjectId) -> UserResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// A user with `email` whose id is not `id`.
    async fn find_by_email_excluding_id(
        &self,
        email: &str,
        id: ObjectId,
    ) -> UserResult<Option<User>>;

    /// Stores a new document and returns the key the store assigned.
    async fn insert(&self, user: NewUser) -> UserResult<ObjectId>;

    /// Replaces every field except the key. Replacing a missing id is a no-op.
    async fn replace_by_id(&self, id: ObjectId, user: NewUser) -> UserResult<()>;

    /// Returns how many documents were removed (0 or 1).
    async fn delete_by_id(&self, id: ObjectId) -> UserResult<u64>;

    /// Every user, in insertion order.
    async fn list_all(&self) -> UserResult<Vec<User>>;
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// The lock is held for one call at a time only, so like the MongoDB
/// implementation it does not serialize the service's check-then-write
/// sequences.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: ObjectId) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_email_excluding_id(
        &self,
        email: &str,
        id: ObjectId,
    ) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email == email && u.id != id)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> UserResult<ObjectId> {
        let id = ObjectId::new();
        let mut users = self.users.write().await;
        users.push(User {
            id,
            name: user.name,
            email: user.email,
            hashed_password: user.hashed_password,
        });

        tracing::debug!(user_id = %id, "Inserted user");
        Ok(id)
    }

    async fn replace_by_id(&self, id: ObjectId, user: NewUser) -> UserResult<()> {
        let mut users = self.users.write().await;
        if let Some(existing) = users.iter_mut().find(|u| u.id == id) {
            existing.name = user.name;
            existing.email = user.email;
            existing.hashed_password = user.hashed_password;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: ObjectId) -> UserResult<u64> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok((before - users.len()) as u64)
    }

    async fn list_all(&self) -> UserResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}
