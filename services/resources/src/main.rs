//! Resource service binary.
//!
//! Tables are created by the `migration` binary, or at startup when
//! `RUN_MIGRATIONS=1`.

use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use otpgate_core::tracing::init_tracing;
use otpgate_resources::config::ResourcesConfig;
use otpgate_resources::router::build_router;
use otpgate_resources::state::AppState;
use otpgate_resources_migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ResourcesConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None).await.expect("failed to run migrations");
        info!("migrations applied");
    }

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.resources_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("resource service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
