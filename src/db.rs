use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Create a SeaORM connection backed by a sqlx Postgres pool.
pub async fn create_orm_conn(database_url: &str, max_connections: u32) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(max_connections)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Apply the SQL files in `migrations/` that have not run yet.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    let pool = conn.get_postgres_connection_pool();
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
