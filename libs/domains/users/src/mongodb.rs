//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, oid::ObjectId},
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};
use crate::repository::UserRepository;

/// Collection holding user documents.
pub const USERS_COLLECTION: &str = "users";

const EMAIL_INDEX: &str = "email_lookup";

/// MongoDB implementation of the UserRepository
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoUserRepository::new(client.database("user_service"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, USERS_COLLECTION)
    }

    /// Create a new MongoUserRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<User>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<User> {
        &self.collection
    }

    /// Create the lookup index on `email`.
    ///
    /// The index is not unique: duplicate detection stays in the service.
    #[instrument(skip(self))]
    pub async fn ensure_indexes(&self) -> UserResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .name(EMAIL_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!(index = EMAIL_INDEX, "User indexes ensured");
        Ok(())
    }

    fn id_filter(id: ObjectId) -> Document {
        doc! { "_id": id }
    }

    fn email_filter(email: &str) -> Document {
        doc! { "email": email }
    }

    fn email_excluding_id_filter(email: &str, id: ObjectId) -> Document {
        doc! { "email": email, "_id": { "$ne": id } }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> UserResult<Option<User>> {
        let user = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let user = self.collection.find_one(Self::email_filter(email)).await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_email_excluding_id(
        &self,
        email: &str,
        id: ObjectId,
    ) -> UserResult<Option<User>> {
        let user = self
            .collection
            .find_one(Self::email_excluding_id_filter(email, id))
            .await?;
        Ok(user)
    }

    #[instrument(skip(self, user))]
    async fn insert(&self, user: NewUser) -> UserResult<ObjectId> {
        let result = self
            .collection
            .clone_with_type::<NewUser>()
            .insert_one(&user)
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            UserError::StoreUnavailable(format!(
                "store assigned a non-ObjectId key: {}",
                result.inserted_id
            ))
        })?;

        tracing::info!(user_id = %id, "User document inserted");
        Ok(id)
    }

    #[instrument(skip(self, user))]
    async fn replace_by_id(&self, id: ObjectId, user: NewUser) -> UserResult<()> {
        let result = self
            .collection
            .clone_with_type::<NewUser>()
            .replace_one(Self::id_filter(id), &user)
            .await?;

        tracing::debug!(
            user_id = %id,
            matched = result.matched_count,
            "User document replaced"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ObjectId) -> UserResult<u64> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;
        Ok(result.deleted_count)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> UserResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }
}
