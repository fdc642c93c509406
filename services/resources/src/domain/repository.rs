#![allow(async_fn_in_trait)]

use crate::domain::types::{Item, ItemFields, NewUser, User};
use crate::error::ResourceServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, ResourceServiceError>;

    /// Insert a user. Fails with `UserAlreadyExists` when the username is taken.
    async fn create(&self, user: &NewUser) -> Result<User, ResourceServiceError>;
}

/// Repository for items.
pub trait ItemRepository: Send + Sync {
    /// All items, ordered by id.
    async fn list(&self) -> Result<Vec<Item>, ResourceServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Item>, ResourceServiceError>;

    async fn create(&self, fields: &ItemFields) -> Result<Item, ResourceServiceError>;

    /// Replace name and description. Returns `None` if no item has `id`.
    async fn update(
        &self,
        id: i32,
        fields: &ItemFields,
    ) -> Result<Option<Item>, ResourceServiceError>;

    /// Delete an item. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ResourceServiceError>;
}
