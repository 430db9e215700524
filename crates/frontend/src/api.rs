use dioxus::logger::tracing::warn;
use place_picker_shared::models::{MessageResponse, Place, PlacesPayload};
use place_picker_shared::{ApiError, PlacesApi};
use serde::Serialize;

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Base URL of the catalog service, fixed at build time.
pub fn api_base_url() -> &'static str {
    option_env!("PLACE_PICKER_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Join a base URL and a path with exactly one slash between them.
pub fn build_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Images are served from the root of the catalog service.
pub fn image_url(src: &str) -> String {
    build_url(api_base_url(), src)
}

/// Request body for the full-replacement write.
#[derive(Debug, Serialize)]
pub struct PlacesBody<'a> {
    pub places: &'a [Place],
}

fn transport(e: reqwest::Error) -> ApiError {
    warn!("Request failed: {e}");
    ApiError::Transport(e.to_string())
}

#[derive(Debug, Clone)]
pub struct HttpPlacesApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPlacesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpPlacesApi {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_places(&self, path: &str, failure: ApiError) -> Result<Vec<Place>, ApiError> {
        let resp = self
            .client
            .get(build_url(&self.base_url, path))
            .send()
            .await
            .map_err(transport)?;

        if !resp.status().is_success() {
            warn!(status = %resp.status(), path, "Fetch rejected");
            return Err(failure);
        }

        let payload: PlacesPayload = resp.json().await.map_err(transport)?;
        Ok(payload.places)
    }
}

impl PlacesApi for HttpPlacesApi {
    async fn fetch_available_places(&self) -> Result<Vec<Place>, ApiError> {
        self.get_places("places", ApiError::FetchPlaces).await
    }

    async fn fetch_user_places(&self) -> Result<Vec<Place>, ApiError> {
        self.get_places("user-places", ApiError::FetchUserPlaces).await
    }

    async fn update_user_places(&self, places: &[Place]) -> Result<String, ApiError> {
        let resp = self
            .client
            .put(build_url(&self.base_url, "user-places"))
            .json(&PlacesBody { places })
            .send()
            .await
            .map_err(transport)?;

        if !resp.status().is_success() {
            warn!(status = %resp.status(), "Update rejected");
            return Err(ApiError::UpdateUserPlaces);
        }

        let body: MessageResponse = resp.json().await.map_err(transport)?;
        Ok(body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use place_picker_shared::models::PlaceImage;

    fn place(id: &str) -> Place {
        Place {
            id: id.to_string(),
            title: "Forest Waterfall".to_string(),
            image: PlaceImage {
                src: "forest-waterfall.jpg".to_string(),
                alt: "A forest".to_string(),
            },
            description: String::new(),
            lat: 44.5588,
            lng: -80.344,
        }
    }

    // --- URL builders ---

    #[test]
    fn test_build_url() {
        assert_eq!(
            build_url("http://localhost:3000", "places"),
            "http://localhost:3000/places"
        );
    }

    #[test]
    fn test_build_url_trims_duplicate_slashes() {
        assert_eq!(
            build_url("https://places.example.com/", "/user-places"),
            "https://places.example.com/user-places"
        );
    }

    #[test]
    fn test_image_url_uses_api_base() {
        let url = image_url("forest-waterfall.jpg");
        assert!(url.starts_with(api_base_url().trim_end_matches('/')));
        assert!(url.ends_with("/forest-waterfall.jpg"));
    }

    // --- Wire formats ---

    #[test]
    fn test_places_body_serializes() {
        let places = vec![place("p1"), place("p2")];
        let json = serde_json::to_value(PlacesBody { places: &places }).unwrap();
        assert_eq!(json["places"].as_array().unwrap().len(), 2);
        assert_eq!(json["places"][0]["id"], "p1");
        assert_eq!(json["places"][1]["image"]["src"], "forest-waterfall.jpg");
    }

    #[test]
    fn test_places_response_deserializes() {
        let json = r#"{"places":[{"id":"p3","title":"Himalayan Peaks","image":{"src":"majestic-mountains.jpg","alt":"Snow-capped mountains"},"description":"","lat":27.9881,"lng":86.925}]}"#;
        let resp: PlacesPayload = serde_json::from_str(json).unwrap();
        assert_eq!(resp.places.len(), 1);
        assert_eq!(resp.places[0].title, "Himalayan Peaks");
        assert_eq!(resp.places[0].lng, 86.925);
    }

    #[test]
    fn test_message_response_deserializes() {
        let json = r#"{"message":"User places updated!"}"#;
        let resp: MessageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message, "User places updated!");
    }

    #[test]
    fn test_not_found_response_deserializes() {
        let json = r#"{"message":"404 - Not Found"}"#;
        let resp: MessageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message, "404 - Not Found");
    }
}
