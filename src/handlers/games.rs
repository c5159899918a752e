use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    db::{AnswerOutcome, NextCard},
    models::{AnswerBody, CreateGameBody},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", post(create_game))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/next-card", get(next_card))
        .route("/games/{id}/answer", post(answer))
}

async fn create_game(
    State(state): State<AppState>,
    Json(body): Json<CreateGameBody>,
) -> Result<Json<Value>, AppError> {
    let point_limit = body.point_limit.unwrap_or(0);
    let player_names = body.player_names.unwrap_or_default();
    if point_limit < 1 || player_names.len() < names::MIN_PLAYERS {
        return Err(AppError::Input("invalid game setup"));
    }

    let game_id = state
        .db
        .create_game(point_limit, &player_names)
        .await
        .reject("could not create game")?;

    Ok(Json(json!({ "game_id": game_id })))
}

async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let game = state
        .db
        .get_game(game_id)
        .await
        .reject("could not get game")?
        .ok_or(AppError::NotFound("game not found"))?;
    let players = state
        .db
        .get_players(game_id)
        .await
        .reject("could not get players")?;

    Ok(Json(json!({ "game": game, "players": players })))
}

async fn next_card(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<NextCard>, AppError> {
    let card = state
        .db
        .next_card(game_id)
        .await
        .reject("could not dispatch card")?
        .ok_or(AppError::NotFound("game not found"))?;

    Ok(Json(card))
}

async fn answer(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
    Json(body): Json<AnswerBody>,
) -> Result<Json<Value>, AppError> {
    let outcome = state
        .db
        .resolve_answer(game_id, body.card_id, body.question_id, &body.action_type)
        .await
        .reject("could not resolve answer")?;

    match outcome {
        AnswerOutcome::GameNotFound => Err(AppError::NotFound("game not found")),
        AnswerOutcome::CardNotFound => Err(AppError::NotFound("card not found")),
        AnswerOutcome::QuestionNotOnCard => {
            Err(AppError::Input("question does not belong to card"))
        }
        AnswerOutcome::AlreadyFinished => Err(AppError::Input("game already finished")),
        AnswerOutcome::Continue {
            next_player_turn,
            new_score,
        } => Ok(Json(json!({
            "success": true,
            "next_player_turn": next_player_turn,
            "new_score": new_score,
        }))),
        AnswerOutcome::Finished { final_scores } => Ok(Json(json!({
            "game_finished": true,
            "final_scores": final_scores,
        }))),
    }
}
