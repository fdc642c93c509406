use sea_orm::DatabaseConnection;

use crate::infra::db::{DbItemRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn item_repo(&self) -> DbItemRepository {
        DbItemRepository {
            db: self.db.clone(),
        }
    }
}
