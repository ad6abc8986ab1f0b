//! Favorite bikes.
//!
//! Favorites are a set of bike ids stored as a JSON array under a single key of a
//! [`KeyValueStore`](kv::KeyValueStore). The set is loaded once and written back
//! after every change. Ids are not checked against the catalog; unknown ids are
//! simply skipped when listing favorite bikes.

use thiserror::Error;

pub mod kv;
pub mod store;

#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("Failed to write favorites: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}
