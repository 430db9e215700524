use crate::error::ApiError;
use crate::models::Place;

/// Client side of the catalog service.
///
/// Implemented over HTTP by the web client and by in-memory fakes in tests.
/// Futures are not required to be `Send` since the browser runs everything on
/// one thread.
#[allow(async_fn_in_trait)]
pub trait PlacesApi {
    async fn fetch_available_places(&self) -> Result<Vec<Place>, ApiError>;

    async fn fetch_user_places(&self) -> Result<Vec<Place>, ApiError>;

    /// Replace the stored selection wholesale. Returns the server's message.
    async fn update_user_places(&self, places: &[Place]) -> Result<String, ApiError>;
}
