// Database module - provides data access layer

use std::collections::HashMap;
use std::sync::Arc;

use color_eyre::{eyre::OptionExt, Result};
use tokio::sync::Mutex;

// Re-export models for convenience
pub mod models;
pub use models::*;

// Internal modules
mod schema;
mod seed;
mod helpers;
mod user;
mod question;
mod game;

pub use game::{AnswerOutcome, NextCard};

// Main database handle
#[derive(Clone)]
pub struct Db {
    db: Arc<libsql::Database>,
    // Per-game locks serializing dispatch and answer resolution for one game.
    game_locks: Arc<Mutex<HashMap<i64, Arc<Mutex<()>>>>>,
}

impl Db {
    pub async fn new(url: String, auth_token: String) -> Result<Self> {
        let db = if url.starts_with("file:") {
            // Local SQLite file
            let path = url.strip_prefix("file:").unwrap_or(&url);
            libsql::Builder::new_local(path).build().await?
        } else {
            // Remote Turso database
            libsql::Builder::new_remote(url.to_owned(), auth_token)
                .build()
                .await?
        };

        let conn = db.connect()?;

        // Verify connection
        let one = conn
            .query("SELECT 1", ())
            .await?
            .next()
            .await?
            .ok_or_eyre("connection check failed")?
            .get::<i32>(0)?;
        assert_eq!(one, 1);

        // Initialize schema, then seed the question catalogue if the table is empty
        schema::create_schema(&conn).await?;
        seed::seed_questions(&conn).await?;

        tracing::info!("database connection has been verified");

        Ok(Self {
            db: Arc::new(db),
            game_locks: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Lock handle for one game. Turn operations acquire this before their
    /// read-modify-write sequence so concurrent requests for the same game
    /// queue instead of interleaving.
    pub(crate) async fn game_lock(&self, game_id: i64) -> Arc<Mutex<()>> {
        let mut locks = self.game_locks.lock().await;
        locks.entry(game_id).or_default().clone()
    }
}
