use place_picker_shared::models::Place;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::AppError;

const PLACES_FILE: &str = "places.json";
const USER_PLACES_FILE: &str = "user-places.json";

/// The two JSON documents behind the API. Every call goes to disk; nothing is
/// cached between requests.
pub struct Storage {
    places_path: PathBuf,
    user_places_path: PathBuf,
}

impl Storage {
    pub fn open(data_dir: &Path) -> Arc<Self> {
        Arc::new(Storage {
            places_path: data_dir.join(PLACES_FILE),
            user_places_path: data_dir.join(USER_PLACES_FILE),
        })
    }

    pub fn places_path(&self) -> &Path {
        &self.places_path
    }

    pub fn user_places_path(&self) -> &Path {
        &self.user_places_path
    }

    /// The read-only catalog.
    pub async fn places(&self) -> Result<Vec<Place>, AppError> {
        let data = tokio::fs::read(&self.places_path).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// The stored selection. A file that does not exist yet reads as empty.
    pub async fn user_places(&self) -> Result<Vec<Place>, AppError> {
        match tokio::fs::read(&self.user_places_path).await {
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the stored selection with `places`.
    pub async fn save_user_places(&self, places: &[Place]) -> Result<(), AppError> {
        let json = serde_json::to_vec(places)?;
        tokio::fs::write(&self.user_places_path, json).await?;
        Ok(())
    }
}
