//! # bike-fit
//!
//! A library for finding bicycle models and sizes that fit a rider's frame
//! measurements.
//!
//! Bike fitters describe a rider's position with two numbers: **stack** (how high
//! the handlebar end of the frame sits above the bottom bracket) and **reach** (how
//! far forward it is). Manufacturers publish both for every frame size, so picking
//! a bike is a nearest-neighbour problem: for each model, find the size closest to
//! the rider's stack/reach, then rank models by how close that best size is.
//!
//! ## Features
//!
//! - **Geometry matching**: Euclidean stack/reach distance with deterministic tie-breaks
//! - **Precise/approximate labels**: configurable tolerance, 10 mm by default
//! - **Remote catalog with fallback**: fetches a static JSON catalog and falls back
//!   to an embedded copy on any failure
//! - **Favorites**: a persisted set of bike ids
//!
//! ## Example
//!
//! ```rust,no_run
//! use bike_fit::{BikeCatalog, GeometryMatcher};
//!
//! // Load the embedded catalog
//! let catalog = BikeCatalog::load_embedded().unwrap();
//!
//! // Rank every bike by its best size for 555mm stack / 395mm reach
//! let matcher = GeometryMatcher::new(&catalog);
//! let matches = matcher.find_matches(555.0, 395.0);
//!
//! for m in matches {
//!     println!("{} size {}: {:.1} mm", m.bike.display_name(), m.geometry.size_label, m.distance);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog storage, embedded fallback, and remote fetch
//! - [`core`]: Core data types for bikes and geometry
//! - [`matching`]: Geometry matching engine
//! - [`favorites`]: Favorite bike persistence
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod favorites;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::remote::{CatalogClient, CatalogOrigin, LoadedCatalog};
pub use crate::catalog::store::BikeCatalog;
pub use crate::core::bike::Bike;
pub use crate::core::geometry::Geometry;
pub use crate::core::types::*;
pub use crate::favorites::store::FavoritesStore;
pub use crate::matching::engine::{match_bikes, GeometryMatcher, MatchResult, MatchingConfig};
