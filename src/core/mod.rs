//! Core data types for bike geometry matching.
//!
//! - [`Bike`](bike::Bike): a bike model with brand, price and its size table
//! - [`Geometry`](geometry::Geometry): frame geometry for one size
//! - [`BikeId`](types::BikeId), [`MatchQuality`](types::MatchQuality): identifiers and
//!   result classification
//!
//! ## Stack and reach
//!
//! Stack and reach locate the top of the head tube relative to the bottom bracket.
//! Together they describe how upright or stretched a frame is independently of
//! seat-tube length, which is why they are the two axes used for matching:
//!
//! | Measure | Direction  | Typical road range |
//! |---------|------------|--------------------|
//! | Stack   | vertical   | 490 - 620 mm       |
//! | Reach   | horizontal | 365 - 425 mm       |

pub mod bike;
pub mod geometry;
pub mod types;
