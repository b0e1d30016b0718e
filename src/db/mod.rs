//! Store handle plus one repository module per table.
//!
//! Every repository function takes a `&mut SqliteConnection`, normally the
//! request's [`Session`], and returns plain rows. A missing row comes back
//! as `None`; turning it into a 404 is the caller's job.

pub mod department;
pub mod employee;
pub mod job_history;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::str::FromStr;

use crate::config::Config;
use crate::errors::AppError;

/// A transaction scoped to a single request. Dropping it without `commit`
/// rolls it back.
pub type Session = Transaction<'static, Sqlite>;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool (creating the database file if needed) and applies the
    /// embedded migrations.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        // Parent rows are not required to exist, and deletes never cascade.
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(false);

        info!(
            "Connecting to {} (max_connections={})",
            config.database_url, config.max_connections
        );
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.migrate().await?;
        Ok(database)
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub async fn session(&self) -> Result<Session, AppError> {
        Ok(self.pool.begin().await?)
    }

    pub async fn close(&self) {
        info!("Closing database pool");
        self.pool.close().await;
    }
}
