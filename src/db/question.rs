use color_eyre::{eyre::OptionExt, Result};
use libsql::params;

use super::helpers::{query_all, query_one};
use super::models::Question;
use super::Db;

impl Db {
    /// Insert a question with its point value derived from the tier table.
    pub async fn create_question(&self, difficulty: i64, text: &str) -> Result<Question> {
        let points =
            crate::names::points_for_tier(difficulty).ok_or_eyre("invalid difficulty tier")?;
        let conn = self.db.connect()?;

        let question = query_one(
            &conn,
            "INSERT INTO questions (difficulty, text, points) VALUES (?, ?, ?) \
             RETURNING id, difficulty, text, points, is_deleted",
            params![difficulty, text, points],
        )
        .await?;

        tracing::info!("new tier-{difficulty} question created");
        Ok(question)
    }

    /// Soft delete: the row stays readable through historical card and
    /// history references, but is excluded from listings and future draws.
    pub async fn soft_delete_question(&self, question_id: i64) -> Result<()> {
        let conn = self.db.connect()?;
        conn.execute(
            "UPDATE questions SET is_deleted = 1 WHERE id = ?",
            params![question_id],
        )
        .await?;

        tracing::info!("question {question_id} soft-deleted");
        Ok(())
    }

    pub async fn list_questions(&self) -> Result<Vec<Question>> {
        let conn = self.db.connect()?;
        query_all(
            &conn,
            "SELECT id, difficulty, text, points, is_deleted FROM questions \
             WHERE is_deleted = 0 ORDER BY difficulty, id",
            (),
        )
        .await
    }

    /// Draw one random live question of the given tier, excluding the given
    /// ids. Returns `None` when the tier has no live candidates left.
    pub async fn sample_live_question(
        &self,
        difficulty: i64,
        exclude: &[i64],
    ) -> Result<Option<i64>> {
        let conn = self.db.connect()?;

        let mut sql =
            String::from("SELECT id FROM questions WHERE difficulty = ? AND is_deleted = 0");
        let mut args: Vec<libsql::Value> = vec![difficulty.into()];
        if !exclude.is_empty() {
            let placeholders = vec!["?"; exclude.len()].join(", ");
            sql.push_str(&format!(" AND id NOT IN ({placeholders})"));
            args.extend(exclude.iter().map(|id| libsql::Value::from(*id)));
        }
        sql.push_str(" ORDER BY RANDOM() LIMIT 1");

        match conn.query(&sql, args).await?.next().await? {
            Some(row) => Ok(Some(row.get::<i64>(0)?)),
            None => Ok(None),
        }
    }
}
