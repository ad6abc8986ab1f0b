//! Geometry matching.
//!
//! - [`GeometryMatcher`](engine::GeometryMatcher): ranks catalog bikes for a stack/reach target
//! - [`MatchResult`](engine::MatchResult): the best size of one bike and its distance
//! - [`best_fit`](scoring::best_fit): nearest size within a single bike
//!
//! ## Algorithm
//!
//! For every bike, each size is scored by its Euclidean distance to the target in
//! the stack/reach plane and the closest size is kept (the first one listed wins a
//! tie). Bikes are then sorted by that distance, with a stable sort so bikes at the
//! same distance stay in catalog order. Bikes without any size produce no result.
//!
//! A result is **precise** when its distance is within the configured tolerance
//! (10 mm by default). This only labels results; nothing is filtered out.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bike_fit::{BikeCatalog, GeometryMatcher};
//!
//! let catalog = BikeCatalog::load_embedded().unwrap();
//! let matcher = GeometryMatcher::new(&catalog);
//!
//! for m in matcher.find_matches(555.0, 395.0) {
//!     println!("{} {}: {:.1} mm ({})",
//!         m.bike.display_name(), m.geometry.size_label, m.distance, m.quality);
//! }
//! ```

pub mod engine;
pub mod scoring;
