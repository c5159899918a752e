// Database schema initialization

use color_eyre::Result;

pub async fn create_schema(conn: &libsql::Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            is_admin BOOLEAN NOT NULL DEFAULT 0,
            wins INTEGER NOT NULL DEFAULT 0,
            losses INTEGER NOT NULL DEFAULT 0,
            total_games INTEGER NOT NULL DEFAULT 0,
            total_points INTEGER NOT NULL DEFAULT 0
        )
        "#,
        (),
    )
    .await?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY,
            difficulty INTEGER NOT NULL,
            text TEXT NOT NULL,
            points INTEGER NOT NULL,
            is_deleted BOOLEAN NOT NULL DEFAULT 0
        )
        "#,
        (),
    )
    .await?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id INTEGER PRIMARY KEY,
            point_limit INTEGER NOT NULL,
            current_player_turn INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'active',
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
        (),
    )
    .await?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS game_players (
            id INTEGER PRIMARY KEY,
            game_id INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            player_order INTEGER NOT NULL,
            current_score INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY(game_id) REFERENCES games(id) ON DELETE CASCADE,
            FOREIGN KEY(user_id) REFERENCES users(id),
            UNIQUE(game_id, user_id),
            UNIQUE(game_id, player_order)
        )
        "#,
        (),
    )
    .await?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS cards (
            id INTEGER PRIMARY KEY,
            game_id INTEGER NOT NULL,
            question_1_id INTEGER NOT NULL,
            question_2_id INTEGER NOT NULL,
            question_3_id INTEGER NOT NULL,
            used BOOLEAN NOT NULL DEFAULT 0,
            FOREIGN KEY(game_id) REFERENCES games(id) ON DELETE CASCADE,
            FOREIGN KEY(question_1_id) REFERENCES questions(id),
            FOREIGN KEY(question_2_id) REFERENCES questions(id),
            FOREIGN KEY(question_3_id) REFERENCES questions(id)
        )
        "#,
        (),
    )
    .await?;

    conn.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_cards_game_used
        ON cards(game_id, used)
        "#,
        (),
    )
    .await?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS game_history (
            id INTEGER PRIMARY KEY,
            game_id INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            card_id INTEGER NOT NULL,
            question_chosen INTEGER NOT NULL,
            points_earned INTEGER NOT NULL,
            action_type TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(game_id) REFERENCES games(id) ON DELETE CASCADE,
            FOREIGN KEY(user_id) REFERENCES users(id),
            FOREIGN KEY(card_id) REFERENCES cards(id),
            FOREIGN KEY(question_chosen) REFERENCES questions(id)
        )
        "#,
        (),
    )
    .await?;

    Ok(())
}
