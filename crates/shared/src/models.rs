use serde::{Deserialize, Serialize};

/// Image reference for a place. `src` is relative to the server's image root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub title: String,
    pub image: PlaceImage,
    #[serde(default)]
    pub description: String,
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
}

impl Place {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A reference point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Body of `GET /places`, `GET /user-places` and `PUT /user-places`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesPayload {
    pub places: Vec<Place>,
}

/// Body of the update acknowledgement and of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
