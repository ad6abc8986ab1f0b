use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::bike::Bike;
use crate::core::types::BikeId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate bike id '{0}' in catalog")]
    DuplicateBike(BikeId),

    #[error("Bike '{bike}' lists size '{size}' more than once")]
    DuplicateSize { bike: BikeId, size: String },

    #[error("Bike '{bike}' has invalid price {price}")]
    InvalidPrice { bike: BikeId, price: f64 },

    #[error("Bike '{bike}' size '{size}' has invalid {field} {value}")]
    InvalidGeometry {
        bike: BikeId,
        size: String,
        field: &'static str,
        value: f64,
    },
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Envelope written by [`BikeCatalog::to_json`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub bikes: Vec<Bike>,
}

/// Anything [`BikeCatalog::from_json`] accepts: the exported envelope or the bare
/// array served by the remote catalog
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Envelope(CatalogData),
    Bikes(Vec<Bike>),
}

/// The bike catalog, in source order, with an id index
#[derive(Debug, Clone)]
pub struct BikeCatalog {
    /// All bikes, in the order they were loaded
    bikes: Vec<Bike>,

    /// Index: bike ID -> index in bikes vec
    id_to_index: HashMap<BikeId, usize>,
}

impl BikeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            bikes: Vec::new(),
            id_to_index: HashMap::new(),
        }
    }

    /// Load the fallback catalog compiled into the binary
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/fallback_bikes.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let payload: CatalogPayload = serde_json::from_str(json)?;
        let bikes = match payload {
            CatalogPayload::Bikes(bikes) => bikes,
            CatalogPayload::Envelope(data) => {
                // Version check (warn but don't fail)
                if data.version != CATALOG_VERSION {
                    warn!(
                        "Catalog version mismatch (expected {}, found {})",
                        CATALOG_VERSION, data.version
                    );
                }
                data.bikes
            }
        };

        let mut catalog = Self::new();
        for bike in bikes {
            catalog.add_bike(bike)?;
        }
        debug!("Parsed catalog with {} bikes", catalog.len());

        Ok(catalog)
    }

    /// Add a bike to the catalog, rejecting duplicates and nonsensical geometry
    pub fn add_bike(&mut self, bike: Bike) -> Result<(), CatalogError> {
        if self.id_to_index.contains_key(&bike.id) {
            return Err(CatalogError::DuplicateBike(bike.id));
        }
        validate_bike(&bike)?;

        if bike.geometries.is_empty() {
            warn!("Bike '{}' has no geometry and will never match", bike.id);
        }

        self.id_to_index.insert(bike.id.clone(), self.bikes.len());
        self.bikes.push(bike);
        Ok(())
    }

    /// Get a bike by ID
    pub fn get(&self, id: &BikeId) -> Option<&Bike> {
        self.id_to_index.get(id).map(|&idx| &self.bikes[idx])
    }

    pub fn contains(&self, id: &BikeId) -> bool {
        self.id_to_index.contains_key(id)
    }

    pub fn bikes(&self) -> &[Bike] {
        &self.bikes
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            bikes: self.bikes.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of bikes in catalog
    pub fn len(&self) -> usize {
        self.bikes.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.bikes.is_empty()
    }
}

impl Default for BikeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_bike(bike: &Bike) -> Result<(), CatalogError> {
    if !(bike.price.is_finite() && bike.price > 0.0) {
        return Err(CatalogError::InvalidPrice {
            bike: bike.id.clone(),
            price: bike.price,
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for geometry in &bike.geometries {
        if !seen.insert(geometry.size_label.as_str()) {
            return Err(CatalogError::DuplicateSize {
                bike: bike.id.clone(),
                size: geometry.size_label.clone(),
            });
        }
        for (field, value) in [("stack", geometry.stack), ("reach", geometry.reach)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CatalogError::InvalidGeometry {
                    bike: bike.id.clone(),
                    size: geometry.size_label.clone(),
                    field,
                    value,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Geometry;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = BikeCatalog::load_embedded().unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.bikes().iter().all(|b| b.geometries.len() == 7));
    }

    #[test]
    fn test_embedded_catalog_order() {
        let catalog = BikeCatalog::load_embedded().unwrap();
        let ids: Vec<&str> = catalog.bikes().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["canyon-aeroad-cfr", "orbea-orca-aero", "specialized-tarmac-sl8"]
        );
    }

    #[test]
    fn test_catalog_get_by_id() {
        let catalog = BikeCatalog::load_embedded().unwrap();

        let tarmac = catalog.get(&BikeId::new("specialized-tarmac-sl8"));
        assert!(tarmac.is_some());
        let tarmac = tarmac.unwrap();
        assert_eq!(tarmac.display_name(), "Specialized Tarmac SL8");
        assert!((tarmac.price - 12500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = BikeCatalog::load_embedded().unwrap();
        assert!(catalog.get(&BikeId::new("nonexistent_bike")).is_none());
    }

    #[test]
    fn test_catalog_to_json_round_trip() {
        let catalog = BikeCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"bikes\""));
        assert!(json.contains("canyon-aeroad-cfr"));

        let reloaded = BikeCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.bikes, catalog.bikes);
    }

    #[test]
    fn test_from_json_bare_array() {
        let json = r#"[{"id":"a","brand":"A","modelName":"One","price":1000,
            "geometries":[{"sizeLabel":"M","stack":550,"reach":390}]}]"#;
        let catalog = BikeCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(&BikeId::new("a")));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            BikeCatalog::from_json("{\"not\": \"a catalog\"}"),
            Err(CatalogError::ParseError(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_bike_id() {
        let mut catalog = BikeCatalog::new();
        let bike = Bike::new("dup", "B", "M", 100.0);
        catalog.add_bike(bike.clone()).unwrap();
        assert!(matches!(
            catalog.add_bike(bike),
            Err(CatalogError::DuplicateBike(_))
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_rejects_duplicate_size_label() {
        let bike = Bike::new("b", "B", "M", 100.0).with_geometries(vec![
            Geometry::new("54", 534.0, 384.0),
            Geometry::new("54", 555.0, 395.0),
        ]);
        let err = BikeCatalog::new().add_bike(bike).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSize { ref size, .. } if size == "54"));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let free = Bike::new("free", "B", "M", 0.0);
        assert!(matches!(
            BikeCatalog::new().add_bike(free),
            Err(CatalogError::InvalidPrice { .. })
        ));

        let flat = Bike::new("flat", "B", "M", 10.0)
            .with_geometries(vec![Geometry::new("S", 500.0, -1.0)]);
        assert!(matches!(
            BikeCatalog::new().add_bike(flat),
            Err(CatalogError::InvalidGeometry { field: "reach", .. })
        ));
    }

    #[test]
    fn test_accepts_bike_without_geometry() {
        let mut catalog = BikeCatalog::new();
        catalog
            .add_bike(Bike::new("frameless", "B", "M", 10.0))
            .unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
