use thiserror::Error;

/// Failures talking to the catalog service. The `Display` text is what the
/// user sees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Failed to fetch places.")]
    FetchPlaces,

    #[error("Failed to fetch user places.")]
    FetchUserPlaces,

    #[error("Failed to update user data.")]
    UpdateUserPlaces,

    #[error("{0}")]
    Transport(String),
}
