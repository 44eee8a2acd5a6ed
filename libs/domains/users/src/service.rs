//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::identifier::parse_user_id;
use crate::models::{CreateUser, DeleteResult, NewUser, UpdateUser, UserResponse};
use crate::password::hash_password;
use crate::repository::UserRepository;

/// User service providing the account operations
///
/// Input has already passed `ValidatedJson` by the time it reaches the
/// service. The service owns identifier parsing, the email uniqueness check
/// and credential hashing, and never returns a stored digest.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every user in storage order
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.list_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Create a new user, rejecting an email that is already registered
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        if self.repository.find_by_email(&input.email).await?.is_some() {
            return Err(UserError::email_taken(input.email));
        }

        let hashed_password = hash_off_thread(input.password).await?;
        let id = self
            .repository
            .insert(NewUser {
                name: input.name,
                email: input.email,
                hashed_password,
            })
            .await?;

        let user = self.repository.find_by_id(id).await?.ok_or_else(|| {
            UserError::StoreUnavailable(format!("inserted user {id} could not be read back"))
        })?;

        tracing::info!(user_id = %id, "User created");
        Ok(user.into())
    }

    /// Get a user by external identifier
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<UserResponse> {
        let key = parse_user_id(id)?;
        self.repository
            .find_by_id(key)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| UserError::not_found(id))
    }

    /// Replace a user's name, email and password
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<UserResponse> {
        let key = parse_user_id(id)?;

        if self.repository.find_by_id(key).await?.is_none() {
            return Err(UserError::not_found(id));
        }

        if self
            .repository
            .find_by_email_excluding_id(&input.email, key)
            .await?
            .is_some()
        {
            return Err(UserError::email_taken(input.email));
        }

        let hashed_password = hash_off_thread(input.password).await?;
        self.repository
            .replace_by_id(
                key,
                NewUser {
                    name: input.name,
                    email: input.email,
                    hashed_password,
                },
            )
            .await?;

        // Gone if a concurrent delete won between the check and the replace.
        let user = self
            .repository
            .find_by_id(key)
            .await?
            .ok_or_else(|| UserError::not_found(id))?;

        tracing::info!(user_id = %key, "User updated");
        Ok(user.into())
    }

    /// Delete a user by external identifier
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<DeleteResult> {
        let key = parse_user_id(id)?;

        if self.repository.find_by_id(key).await?.is_none() {
            return Err(UserError::not_found(id));
        }

        let deleted_count = self.repository.delete_by_id(key).await?;

        tracing::info!(user_id = %key, deleted_count, "User deleted");
        Ok(DeleteResult { deleted_count })
    }
}

/// Argon2 is CPU-bound; keep it off the async workers.
async fn hash_off_thread(password: String) -> UserResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| UserError::HashingUnavailable(e.to_string()))?
}
