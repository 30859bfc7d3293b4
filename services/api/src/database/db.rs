use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

/// opens a connection pool to the postgres database
///
/// # PANICS
/// panics if the database is unreachable
pub async fn connect(database_url: &str) -> DatabaseConnection {
    let mut opts = ConnectOptions::new(database_url.to_owned());
    opts.max_connections(8)
        .connect_timeout(Duration::from_secs(10));

    Database::connect(opts)
        .await
        .unwrap_or_else(|_| panic!("[DB] failed to connect to database"))
}

/// runs all pending migrations
///
/// # PANICS
/// panics if any migration fails, leaving the schema in a state
/// the API cannot safely serve requests on
pub async fn run_migrations(db: &DatabaseConnection) {
    Migrator::up(db, None)
        .await
        .unwrap_or_else(|e| panic!("[DB] failed to run migrations: {e}"));
}
