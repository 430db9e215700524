use crate::cancel::CancelToken;
use crate::error::ApiError;
use crate::geo;
use crate::models::{Coordinates, Place};

/// Available places ordered by proximity to the user.
///
/// The catalog fetch and the geolocation lookup resolve independently and in
/// any order. The view sorts once both have been delivered. A missing position
/// is not an error: the catalog is then shown in its stored order.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    catalog: Option<Vec<Place>>,
    origin: Option<Option<Coordinates>>,
    sorted: Option<Vec<Place>>,
    error: Option<String>,
    cancel: CancelToken,
}

impl CatalogView {
    pub fn new(cancel: CancelToken) -> Self {
        CatalogView {
            cancel,
            ..Self::default()
        }
    }

    pub fn set_catalog(&mut self, result: Result<Vec<Place>, ApiError>) {
        if self.cancel.is_cancelled() {
            return;
        }
        match result {
            Ok(places) => self.catalog = Some(places),
            Err(e) => self.error = Some(e.to_string()),
        }
        self.combine();
    }

    /// Deliver the geolocation outcome; `None` means unavailable or denied.
    pub fn set_origin(&mut self, origin: Option<Coordinates>) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.origin = Some(origin);
        self.combine();
    }

    fn combine(&mut self) {
        if self.sorted.is_some() {
            return;
        }
        if let (Some(catalog), Some(origin)) = (&self.catalog, self.origin) {
            self.sorted = Some(geo::sort_by_distance(catalog, origin));
        }
    }

    pub fn is_loading(&self) -> bool {
        self.sorted.is_none() && self.error.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sorted places, empty until both inputs have arrived.
    pub fn places(&self) -> &[Place] {
        self.sorted.as_deref().unwrap_or_default()
    }
}
