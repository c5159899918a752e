use color_eyre::Result;
use libsql::params;

use super::helpers::{query_one, query_optional};
use super::models::User;
use super::Db;

const USER_COLUMNS: &str = "id, name, is_admin, wins, losses, total_games, total_points";

impl Db {
    /// Look up a user by display name, creating them on first reference.
    /// The `UNIQUE` constraint on `name` plus `ON CONFLICT DO NOTHING` makes
    /// concurrent registrations of the same new name converge on one row.
    pub async fn find_or_create_user(&self, name: &str) -> Result<User> {
        let conn = self.db.connect()?;

        let inserted = conn
            .execute(
                "INSERT INTO users (name) VALUES (?) ON CONFLICT(name) DO NOTHING",
                params![name],
            )
            .await?;
        if inserted > 0 {
            tracing::info!("new user registered: {name}");
        }

        query_one(
            &conn,
            &format!("SELECT {USER_COLUMNS} FROM users WHERE name = ?"),
            params![name],
        )
        .await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let conn = self.db.connect()?;
        query_optional(
            &conn,
            &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"),
            params![user_id],
        )
        .await
    }

    /// Admin flag lookup for the caller-supplied identifier. Unknown users are
    /// simply not admins.
    pub async fn is_admin(&self, user_id: i64) -> Result<bool> {
        let conn = self.db.connect()?;
        let row = conn
            .query("SELECT is_admin FROM users WHERE id = ?", params![user_id])
            .await?
            .next()
            .await?;

        Ok(match row {
            Some(row) => row.get::<i64>(0)? != 0,
            None => false,
        })
    }

    pub async fn set_admin(&self, user_id: i64, is_admin: bool) -> Result<()> {
        let conn = self.db.connect()?;
        conn.execute(
            "UPDATE users SET is_admin = ? WHERE id = ?",
            params![is_admin as i64, user_id],
        )
        .await?;
        Ok(())
    }

    /// Fold a finished game into the user's lifetime counters. The final
    /// score is added to `total_points` whether the player won or lost.
    pub(crate) async fn record_game_result(
        &self,
        user_id: i64,
        won: bool,
        final_score: i64,
    ) -> Result<()> {
        let conn = self.db.connect()?;
        let column = if won { "wins" } else { "losses" };
        conn.execute(
            &format!(
                "UPDATE users SET {column} = {column} + 1, total_games = total_games + 1, \
                 total_points = total_points + ? WHERE id = ?"
            ),
            params![final_score, user_id],
        )
        .await?;
        Ok(())
    }
}
