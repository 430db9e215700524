use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use place_picker_shared::models::MessageResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("404 - Not Found")]
    NotFound,

    #[error("Failed to access data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt data file: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Io(_) | AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
