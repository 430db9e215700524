pub mod api;
pub mod cancel;
pub mod catalog;
pub mod error;
pub mod geo;
pub mod models;
pub mod selection;

pub use api::PlacesApi;
pub use error::ApiError;
