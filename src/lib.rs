pub mod db;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;

use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::users::routes())
        .merge(handlers::games::routes())
        .merge(handlers::admin::routes())
        .with_state(state)
}
