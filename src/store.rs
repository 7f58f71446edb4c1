//! Database bootstrap: create the database if missing and the owners and
//! accounts tables.

use crate::error::AppError;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Idempotent DDL for the two entity tables. The foreign key on
/// `accounts.owner_id` is what ultimately guarantees every account points at
/// an existing owner; application code never re-checks it.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS owners (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            date_of_birth DATE NOT NULL,
            address TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id UUID PRIMARY KEY,
            date_created TIMESTAMPTZ NOT NULL,
            account_type TEXT NOT NULL,
            owner_id UUID NOT NULL REFERENCES owners (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS accounts_owner_id_idx ON accounts (owner_id)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects
/// to the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some(path_start) = database_url.rfind('/') else {
        return Err(AppError::Validation("DATABASE_URL has no database path".into()));
    };
    let db_name = database_url[path_start + 1..]
        .split('?')
        .next()
        .unwrap_or("")
        .trim();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }

    let admin_url = format!("{}postgres", &database_url[..path_start + 1]);
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Validation(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn = opts.connect().await?;

    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists {
        let quoted = format!("\"{}\"", db_name.replace('"', "\"\""));
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}
