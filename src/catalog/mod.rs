//! Bike catalog storage and retrieval.
//!
//! The catalog is a small list of bike models, each with its per-size geometry
//! table. It is normally fetched from a static JSON file; when that fails for any
//! reason the fallback catalog compiled into the binary is used instead, so a
//! search always has data to work with.
//!
//! ## Embedded Catalog
//!
//! The fallback catalog contains three road bikes:
//!
//! - **Canyon Aeroad CFR**: 2XS - 2XL
//! - **Orbea Orca Aero**: 47 - 60
//! - **Specialized Tarmac SL8**: 44 - 61
//!
//! ## Example
//!
//! ```rust,no_run
//! use bike_fit::BikeCatalog;
//! use bike_fit::core::types::BikeId;
//!
//! let catalog = BikeCatalog::load_embedded().unwrap();
//!
//! for bike in catalog.bikes() {
//!     println!("{} ({} sizes)", bike.display_name(), bike.geometries.len());
//! }
//!
//! let aeroad = catalog.get(&BikeId::new("canyon-aeroad-cfr"));
//! ```
//!
//! ## Remote Catalog
//!
//! ```rust,no_run
//! use bike_fit::catalog::remote::CatalogClient;
//!
//! # async fn load() -> anyhow::Result<()> {
//! let loaded = CatalogClient::default().fetch_or_fallback().await?;
//! println!("{} bikes from {}", loaded.catalog.len(), loaded.origin);
//! # Ok(())
//! # }
//! ```

pub mod remote;
pub mod store;
