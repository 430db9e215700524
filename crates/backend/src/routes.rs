use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use place_picker_shared::models::{MessageResponse, PlacesPayload};

use crate::error::AppError;
use crate::storage::Storage;

pub const UPDATED_MESSAGE: &str = "User places updated!";

pub async fn places_handler(
    State(storage): State<Arc<Storage>>,
) -> Result<Json<PlacesPayload>, AppError> {
    let places = storage.places().await?;
    Ok(Json(PlacesPayload { places }))
}

pub async fn user_places_handler(
    State(storage): State<Arc<Storage>>,
) -> Result<Json<PlacesPayload>, AppError> {
    let places = storage.user_places().await?;
    Ok(Json(PlacesPayload { places }))
}

/// Replace the stored selection wholesale. Last writer wins.
pub async fn update_user_places_handler(
    State(storage): State<Arc<Storage>>,
    payload: Result<Json<PlacesPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(PlacesPayload { places }) =
        payload.map_err(|e| AppError::MalformedPayload(e.body_text()))?;

    storage.save_user_places(&places).await?;
    tracing::info!(places = places.len(), "Updated user places");

    Ok(Json(MessageResponse::new(UPDATED_MESSAGE)))
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}
