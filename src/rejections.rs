use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors surfaced at the HTTP boundary. Everything the db layer reports is
/// collapsed into `Internal`; the real cause is logged, not leaked.
#[derive(Debug)]
pub enum AppError {
    Input(&'static str),
    NotFound(&'static str),
    Forbidden,
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Input(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "not admin"),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (code, Json(json!({ "error": message }))).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the underlying error and replace it with a generic internal rejection.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for color_eyre::Result<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e:?}");
            AppError::Internal(msg)
        })
    }
}
