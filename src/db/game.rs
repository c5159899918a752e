// Turn engine: game lifecycle, deck management, scoring.

use color_eyre::{
    eyre::{eyre, OptionExt},
    Result,
};
use libsql::params;
use serde::Serialize;

use super::helpers::{query_all, query_one, query_optional, query_scalar_i64};
use super::models::{CardRow, Game, GamePlayer, QuestionRef};
use super::Db;

const PLAYERS_SQL: &str = "SELECT gp.id, gp.game_id, gp.user_id, gp.player_order, \
     gp.current_score, u.name \
     FROM game_players gp JOIN users u ON u.id = gp.user_id \
     WHERE gp.game_id = ? ORDER BY gp.player_order";

const CARD_COLUMNS: &str = "id, question_1_id, question_2_id, question_3_id";

/// A dispatched card: the current player plus one question per tier.
#[derive(Debug, Serialize)]
pub struct NextCard {
    pub card_id: i64,
    pub current_player: GamePlayer,
    pub questions: Vec<QuestionRef>,
}

/// Result of resolving one turn.
#[derive(Debug)]
pub enum AnswerOutcome {
    GameNotFound,
    CardNotFound,
    QuestionNotOnCard,
    AlreadyFinished,
    Continue { next_player_turn: i64, new_score: i64 },
    Finished { final_scores: Vec<GamePlayer> },
}

impl Db {
    /// Create a game: find-or-create each player in input order, then deal
    /// the deck. Input validation happens before this is called.
    pub async fn create_game(&self, point_limit: i64, player_names: &[String]) -> Result<i64> {
        let conn = self.db.connect()?;

        let game_id = query_scalar_i64(
            &conn,
            "INSERT INTO games (point_limit, current_player_turn) VALUES (?, 0) RETURNING id",
            params![point_limit],
        )
        .await?;

        for (order, name) in player_names.iter().enumerate() {
            let user = self.find_or_create_user(name).await?;
            conn.execute(
                "INSERT INTO game_players (game_id, user_id, player_order) VALUES (?, ?, ?)",
                params![game_id, user.id, order as i64],
            )
            .await?;
        }

        self.generate_cards(&conn, game_id).await?;

        tracing::info!(game_id, players = player_names.len(), "new game created");
        Ok(game_id)
    }

    /// Deal the full deck. Each card draws one random live question per tier;
    /// draws are independent, so a question may appear on several cards.
    async fn generate_cards(&self, conn: &libsql::Connection, game_id: i64) -> Result<()> {
        for _ in 0..crate::names::DECK_SIZE {
            let mut drawn = [0i64; 3];
            for (slot, tier) in crate::names::TIERS.iter().enumerate() {
                drawn[slot] = self
                    .sample_live_question(*tier, &[])
                    .await?
                    .ok_or_else(|| eyre!("no live questions for tier {tier}"))?;
            }
            conn.execute(
                "INSERT INTO cards (game_id, question_1_id, question_2_id, question_3_id) \
                 VALUES (?, ?, ?, ?)",
                params![game_id, drawn[0], drawn[1], drawn[2]],
            )
            .await?;
        }
        Ok(())
    }

    pub async fn get_game(&self, game_id: i64) -> Result<Option<Game>> {
        let conn = self.db.connect()?;
        query_optional(
            &conn,
            "SELECT id, point_limit, current_player_turn, status, updated_at \
             FROM games WHERE id = ?",
            params![game_id],
        )
        .await
    }

    pub async fn get_players(&self, game_id: i64) -> Result<Vec<GamePlayer>> {
        let conn = self.db.connect()?;
        query_all(&conn, PLAYERS_SQL, params![game_id]).await
    }

    /// Dispatch a card to the current player. Picks any unused card of the
    /// game; when the deck is exhausted every card is reset to unused first,
    /// so play can cycle the deck indefinitely. The card is NOT marked used
    /// here - only answer resolution consumes it, so re-requesting without
    /// answering re-dispatches.
    pub async fn next_card(&self, game_id: i64) -> Result<Option<NextCard>> {
        let lock = self.game_lock(game_id).await;
        let _guard = lock.lock().await;
        let conn = self.db.connect()?;

        let Some(game) = self.get_game(game_id).await? else {
            return Ok(None);
        };
        let players = query_all::<GamePlayer>(&conn, PLAYERS_SQL, params![game_id]).await?;
        let current_player = players
            .get(game.current_player_turn as usize)
            .ok_or_eyre("turn index out of range")?
            .clone();

        let unused_sql =
            format!("SELECT {CARD_COLUMNS} FROM cards WHERE game_id = ? AND used = 0 LIMIT 1");
        let card = match query_optional::<CardRow>(&conn, &unused_sql, params![game_id]).await? {
            Some(card) => card,
            None => {
                // Deck exhausted: reshuffle by resetting every card
                conn.execute("UPDATE cards SET used = 0 WHERE game_id = ?", params![game_id])
                    .await?;
                tracing::info!(game_id, "deck exhausted, reshuffled");
                query_one::<CardRow>(&conn, &unused_sql, params![game_id]).await?
            }
        };

        let mut questions = Vec::with_capacity(3);
        for question_id in [card.question_1_id, card.question_2_id, card.question_3_id] {
            questions.push(
                query_one::<QuestionRef>(
                    &conn,
                    "SELECT id, text, points FROM questions WHERE id = ?",
                    params![question_id],
                )
                .await?,
            );
        }

        Ok(Some(NextCard {
            card_id: card.id,
            current_player,
            questions,
        }))
    }

    /// Resolve one turn for the current player (re-derived from the stored
    /// turn index, never trusted from the caller): score the chosen question
    /// or apply the refusal penalty, log history, consume the card, then
    /// either finalize the game or pass the turn.
    pub async fn resolve_answer(
        &self,
        game_id: i64,
        card_id: i64,
        question_id: i64,
        action_type: &str,
    ) -> Result<AnswerOutcome> {
        let lock = self.game_lock(game_id).await;
        let _guard = lock.lock().await;
        let conn = self.db.connect()?;

        let Some(game) = self.get_game(game_id).await? else {
            return Ok(AnswerOutcome::GameNotFound);
        };
        if game.status == crate::names::STATUS_FINISHED {
            return Ok(AnswerOutcome::AlreadyFinished);
        }

        let players = query_all::<GamePlayer>(&conn, PLAYERS_SQL, params![game_id]).await?;
        let current_player = players
            .get(game.current_player_turn as usize)
            .ok_or_eyre("turn index out of range")?;

        let card = query_optional::<CardRow>(
            &conn,
            &format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = ? AND game_id = ?"),
            params![card_id, game_id],
        )
        .await?;
        let Some(card) = card else {
            return Ok(AnswerOutcome::CardNotFound);
        };
        if ![card.question_1_id, card.question_2_id, card.question_3_id].contains(&question_id) {
            return Ok(AnswerOutcome::QuestionNotOnCard);
        }

        let points = if action_type == crate::names::ACTION_REFUSED {
            crate::names::REFUSAL_PENALTY
        } else {
            query_scalar_i64(
                &conn,
                "SELECT points FROM questions WHERE id = ?",
                params![question_id],
            )
            .await?
        };

        conn.execute(
            "UPDATE game_players SET current_score = current_score + ? WHERE id = ?",
            params![points, current_player.id],
        )
        .await?;
        conn.execute(
            "INSERT INTO game_history \
             (game_id, user_id, card_id, question_chosen, points_earned, action_type) \
             VALUES (?, ?, ?, ?, ?, ?)",
            params![game_id, current_player.user_id, card_id, question_id, points, action_type],
        )
        .await?;
        conn.execute("UPDATE cards SET used = 1 WHERE id = ?", params![card_id])
            .await?;

        let new_score = query_scalar_i64(
            &conn,
            "SELECT current_score FROM game_players WHERE id = ?",
            params![current_player.id],
        )
        .await?;

        if new_score >= game.point_limit {
            return self.finish_game(&conn, &game).await;
        }

        let next_player_turn = (game.current_player_turn + 1) % players.len() as i64;
        conn.execute(
            "UPDATE games SET current_player_turn = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ?",
            params![next_player_turn, game_id],
        )
        .await?;

        Ok(AnswerOutcome::Continue {
            next_player_turn,
            new_score,
        })
    }

    /// Finalize: mark the game finished, then fold every player's result into
    /// their lifetime counters. Anyone at or above the limit counts as a
    /// winner; final standings are ordered by descending score.
    async fn finish_game(&self, conn: &libsql::Connection, game: &Game) -> Result<AnswerOutcome> {
        conn.execute(
            "UPDATE games SET status = 'finished', updated_at = CURRENT_TIMESTAMP WHERE id = ?",
            params![game.id],
        )
        .await?;

        let final_scores = query_all::<GamePlayer>(
            conn,
            "SELECT gp.id, gp.game_id, gp.user_id, gp.player_order, gp.current_score, u.name \
             FROM game_players gp JOIN users u ON u.id = gp.user_id \
             WHERE gp.game_id = ? ORDER BY gp.current_score DESC",
            params![game.id],
        )
        .await?;

        for player in &final_scores {
            let won = player.current_score >= game.point_limit;
            self.record_game_result(player.user_id, won, player.current_score)
                .await?;
        }

        tracing::info!(game_id = game.id, "game finished");
        Ok(AnswerOutcome::Finished { final_scores })
    }
}
