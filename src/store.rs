//! Database bootstrap: pool creation, database creation (PostgreSQL) and table DDL.
//! DDL sticks to types `sqlx::Any` decodes on both backends (TEXT, BIGINT); flags are 0/1 BIGINT.

use crate::config::{DatabaseBackend, Settings};
use crate::error::AppError;
use sqlx::any::AnyPoolOptions;
use sqlx::postgres::PgConnectOptions;
use sqlx::AnyPool;
use sqlx::ConnectOptions;
use std::str::FromStr;

/// Tables in dependency order: parents before the rows that reference them.
const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            email TEXT PRIMARY KEY,
            password TEXT NOT NULL,
            subscription_date TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        )
        "#,
    ),
    (
        "planets",
        r#"
        CREATE TABLE IF NOT EXISTS planets (
            name TEXT PRIMARY KEY,
            galaxy TEXT NOT NULL,
            moon_count BIGINT NOT NULL,
            habitable BIGINT NOT NULL CHECK (habitable IN (0, 1))
        )
        "#,
    ),
    (
        "characters",
        r#"
        CREATE TABLE IF NOT EXISTS characters (
            name TEXT PRIMARY KEY,
            age BIGINT NOT NULL,
            planet_name TEXT NOT NULL REFERENCES planets (name)
        )
        "#,
    ),
    (
        "ships",
        r#"
        CREATE TABLE IF NOT EXISTS ships (
            name TEXT PRIMARY KEY,
            capacity BIGINT NOT NULL,
            speed BIGINT NOT NULL,
            captain TEXT NOT NULL REFERENCES characters (name)
        )
        "#,
    ),
    (
        "favorite_planets",
        r#"
        CREATE TABLE IF NOT EXISTS favorite_planets (
            user_email TEXT NOT NULL REFERENCES users (email),
            planet_name TEXT NOT NULL REFERENCES planets (name),
            PRIMARY KEY (user_email, planet_name)
        )
        "#,
    ),
    (
        "favorite_characters",
        r#"
        CREATE TABLE IF NOT EXISTS favorite_characters (
            user_email TEXT NOT NULL REFERENCES users (email),
            character_name TEXT NOT NULL REFERENCES characters (name),
            PRIMARY KEY (user_email, character_name)
        )
        "#,
    ),
];

/// Open a pool for `database_url`. Works for both `postgres://` and `sqlite:` urls.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create the target database when needed, open the pool and create tables.
pub async fn bootstrap(settings: &Settings) -> Result<AnyPool, AppError> {
    if settings.backend == DatabaseBackend::Postgres {
        ensure_database_exists(&settings.database_url).await?;
    }
    let pool = connect(&settings.database_url, settings.max_connections).await?;
    ensure_tables(&pool).await?;
    Ok(pool)
}

/// Create all tables if they do not exist yet. Idempotent.
pub async fn ensure_tables(pool: &AnyPool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(*ddl).execute(pool).await?;
    }
    Ok(())
}

/// Split a PostgreSQL url into maintenance options (same server, `postgres` database) and the
/// database to create. `None` when the url names no database or names `postgres` itself.
fn maintenance_target(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let target = PgConnectOptions::from_str(database_url)?;
    let name = match target.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((target.database("postgres"), name)))
}

/// Create the PostgreSQL database named in `database_url` when the server does not have it yet.
/// Runs before the main pool exists, over a single maintenance connection.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((maintenance, name)) = maintenance_target(database_url)? else {
        return Ok(());
    };
    let mut conn = maintenance.connect().await?;
    let present = sqlx::query("SELECT 1 FROM pg_database WHERE datname = $1")
        .bind(&name)
        .fetch_optional(&mut conn)
        .await?
        .is_some();
    if !present {
        tracing::info!(database = %name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintenance_connection_uses_postgres_database() {
        let (maintenance, name) = maintenance_target("postgres://u:p@localhost:5432/stars")
            .unwrap()
            .unwrap();
        assert_eq!(name, "stars");
        assert_eq!(maintenance.get_database(), Some("postgres"));
        assert_eq!(maintenance.get_host(), "localhost");
        assert_eq!(maintenance.get_port(), 5432);
    }

    #[test]
    fn postgres_database_itself_needs_no_creation() {
        assert!(maintenance_target("postgresql://db/postgres").unwrap().is_none());
    }

    #[test]
    fn malformed_url_is_a_db_error() {
        assert!(matches!(
            maintenance_target("postgres://u:p@localhost:notaport/stars"),
            Err(AppError::Db(_))
        ));
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote_ident("my\"db"), "\"my\"\"db\"");
    }

    #[tokio::test]
    async fn ensure_tables_is_idempotent() {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM planets")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }
}
