use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    /// Directory holding `places.json` and `user-places.json`.
    pub data_dir: PathBuf,
    /// Served at the server root.
    pub images_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", 3000),
            data_dir: PathBuf::from(try_load("DATA_DIR", "data".to_string())),
            images_dir: PathBuf::from(try_load("IMAGES_DIR", "images".to_string())),
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
