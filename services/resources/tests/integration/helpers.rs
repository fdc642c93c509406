use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use otpgate_resources::router::build_router;
use otpgate_resources::state::AppState;
use otpgate_resources_migration::Migrator;

/// Fresh in-memory SQLite database with all migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn test_server() -> TestServer {
    let state = AppState { db: test_db().await };
    TestServer::new(build_router(state)).unwrap()
}
