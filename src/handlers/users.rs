use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::{
    db::models::User,
    models::CreateUserBody,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user))
}

/// Find-or-create by display name. Registering an existing name returns the
/// existing row untouched.
async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> Result<Json<User>, AppError> {
    let name = body.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::Input("name required"));
    }

    let user = state
        .db
        .find_or_create_user(name)
        .await
        .reject("could not find or create user")?;

    Ok(Json(user))
}

async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = state
        .db
        .get_user(user_id)
        .await
        .reject("could not get user")?
        .ok_or(AppError::NotFound("user not found"))?;

    Ok(Json(user))
}
