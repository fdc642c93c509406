use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};

use otpgate_resources_schema::{items, users};

use crate::domain::repository::{ItemRepository, UserRepository};
use crate::domain::types::{Item, ItemFields, NewUser, User};
use crate::error::ResourceServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, ResourceServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<User, ResourceServiceError> {
        let result = users::ActiveModel {
            id: NotSet,
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            otp_secret: Set(user.otp_secret.clone()),
            email: Set(user.email.clone()),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(model) => Ok(user_from_model(model)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ResourceServiceError::UserAlreadyExists)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        password_hash: model.password_hash,
        otp_secret: model.otp_secret,
        email: model.email,
    }
}

// ── Item repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbItemRepository {
    pub db: DatabaseConnection,
}

impl ItemRepository for DbItemRepository {
    async fn list(&self) -> Result<Vec<Item>, ResourceServiceError> {
        let models = items::Entity::find()
            .order_by_asc(items::Column::Id)
            .all(&self.db)
            .await
            .context("list items")?;
        Ok(models.into_iter().map(item_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Item>, ResourceServiceError> {
        let model = items::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find item by id")?;
        Ok(model.map(item_from_model))
    }

    async fn create(&self, fields: &ItemFields) -> Result<Item, ResourceServiceError> {
        let model = items::ActiveModel {
            id: NotSet,
            name: Set(fields.name.clone()),
            description: Set(fields.description.clone()),
        }
        .insert(&self.db)
        .await
        .context("create item")?;
        Ok(item_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        fields: &ItemFields,
    ) -> Result<Option<Item>, ResourceServiceError> {
        let result = items::ActiveModel {
            id: Set(id),
            name: Set(fields.name.clone()),
            description: Set(fields.description.clone()),
        }
        .update(&self.db)
        .await;

        match result {
            Ok(model) => Ok(Some(item_from_model(model))),
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(anyhow::Error::new(e).context("update item").into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ResourceServiceError> {
        let result = items::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete item")?;
        Ok(result.rows_affected > 0)
    }
}

fn item_from_model(model: items::Model) -> Item {
    Item {
        id: model.id,
        name: model.name,
        description: model.description,
    }
}
