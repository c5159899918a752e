// Database model structs

use serde::{Deserialize, Deserializer, Serialize};

/// SQLite stores booleans as 0/1 integers.
fn bool_from_int<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    Ok(i64::deserialize(de)? != 0)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "bool_from_int")]
    pub is_admin: bool,
    pub wins: i64,
    pub losses: i64,
    pub total_games: i64,
    pub total_points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub difficulty: i64,
    pub text: String,
    pub points: i64,
    #[serde(deserialize_with = "bool_from_int")]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub point_limit: i64,
    pub current_player_turn: i64,
    pub status: String,
    pub updated_at: String,
}

/// Player-in-game row, joined with the user's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePlayer {
    pub id: i64,
    pub game_id: i64,
    pub user_id: i64,
    pub player_order: i64,
    pub current_score: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardRow {
    pub id: i64,
    pub question_1_id: i64,
    pub question_2_id: i64,
    pub question_3_id: i64,
}

/// Question fields exposed to players on a dispatched card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRef {
    pub id: i64,
    pub text: String,
    pub points: i64,
}
