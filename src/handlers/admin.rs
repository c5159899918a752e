use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    db::models::Question,
    db::Db,
    models::{CreateQuestionBody, DeleteQuestionBody},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/questions", post(create_question).get(list_questions))
        .route("/admin/questions/{id}", delete(delete_question))
}

/// The trust boundary is the caller-supplied user id itself: it resolves to an
/// admin flag, nothing more. Kept in one place so a real credential check
/// could replace it without touching the question logic.
async fn require_admin(db: &Db, user_id: Option<i64>) -> Result<(), AppError> {
    let Some(user_id) = user_id else {
        return Err(AppError::Forbidden);
    };
    let is_admin = db
        .is_admin(user_id)
        .await
        .reject("could not check admin flag")?;
    if is_admin {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

async fn create_question(
    State(state): State<AppState>,
    Json(body): Json<CreateQuestionBody>,
) -> Result<Json<Question>, AppError> {
    require_admin(&state.db, body.user_id).await?;

    let difficulty = body.difficulty.unwrap_or(0);
    if names::points_for_tier(difficulty).is_none() {
        return Err(AppError::Input("difficulty must be 1, 2 or 3"));
    }
    let text = body.text.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(AppError::Input("text required"));
    }

    let question = state
        .db
        .create_question(difficulty, text)
        .await
        .reject("could not create question")?;

    Ok(Json(question))
}

async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Json(body): Json<DeleteQuestionBody>,
) -> Result<Json<Value>, AppError> {
    require_admin(&state.db, body.user_id).await?;

    state
        .db
        .soft_delete_question(question_id)
        .await
        .reject("could not delete question")?;

    Ok(Json(json!({ "success": true })))
}

async fn list_questions(State(state): State<AppState>) -> Result<Json<Vec<Question>>, AppError> {
    let questions = state
        .db
        .list_questions()
        .await
        .reject("could not list questions")?;

    Ok(Json(questions))
}
