/// Resource service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ResourcesConfig {
    /// Database connection URL (default `sqlite://db.sqlite?mode=rwc`).
    /// Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port to listen on (default 5002). Env var: `RESOURCES_PORT`.
    pub resources_port: u16,
    /// Apply pending migrations before serving (default off). Env var:
    /// `RUN_MIGRATIONS` (`1`/`true`). When off, run the `migration` binary first.
    pub run_migrations: bool,
}

impl ResourcesConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://db.sqlite?mode=rwc".to_owned()),
            resources_port: lookup("RESOURCES_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5002),
            run_migrations: lookup("RUN_MIGRATIONS")
                .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true")),
        }
    }
}
