use serde::{Deserialize, Serialize};

use crate::core::geometry::Geometry;
use crate::core::types::BikeId;

/// A bike model with its per-size geometry table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bike {
    /// Unique identifier
    pub id: BikeId,

    pub brand: String,

    pub model_name: String,

    /// Price in euros
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Sizes in the manufacturer's order (smallest first in practice)
    #[serde(default)]
    pub geometries: Vec<Geometry>,
}

impl Bike {
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model_name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: BikeId::new(id),
            brand: brand.into(),
            model_name: model_name.into(),
            price,
            image_url: None,
            geometries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_geometries(mut self, geometries: Vec<Geometry>) -> Self {
        self.geometries = geometries;
        self
    }

    /// "Brand Model", as shown in listings
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model_name)
    }

    /// Look up a size by its label
    #[must_use]
    pub fn geometry_for_size(&self, size_label: &str) -> Option<&Geometry> {
        self.geometries.iter().find(|g| g.size_label == size_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bike() -> Bike {
        Bike::new("canyon-aeroad-cfr", "Canyon", "Aeroad CFR", 8999.0).with_geometries(vec![
            Geometry::new("S", 533.0, 385.0),
            Geometry::new("M", 555.0, 395.0),
        ])
    }

    #[test]
    fn test_geometry_for_size() {
        let bike = make_bike();
        let m = bike.geometry_for_size("M").unwrap();
        assert!((m.stack - 555.0).abs() < f64::EPSILON);
        assert!(bike.geometry_for_size("XL").is_none());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(make_bike().display_name(), "Canyon Aeroad CFR");
    }

    #[test]
    fn test_wire_format_round_trip_fields() {
        let json = r#"{
            "id": "orbea-orca-aero",
            "brand": "Orbea",
            "modelName": "Orca Aero",
            "price": 5999.0,
            "imageUrl": "https://example.com/orca.jpg",
            "geometries": [{"sizeLabel": "53", "stack": 553, "reach": 386}]
        }"#;
        let bike: Bike = serde_json::from_str(json).unwrap();
        assert_eq!(bike.id, BikeId::new("orbea-orca-aero"));
        assert_eq!(bike.model_name, "Orca Aero");
        assert_eq!(bike.image_url.as_deref(), Some("https://example.com/orca.jpg"));
        assert_eq!(bike.geometries.len(), 1);

        let out = serde_json::to_value(&bike).unwrap();
        assert_eq!(out["modelName"], "Orca Aero");
        assert_eq!(out["geometries"][0]["sizeLabel"], "53");
    }

    #[test]
    fn test_missing_image_url_is_none() {
        let json = r#"{"id":"x","brand":"B","modelName":"M","price":1.0,"geometries":[]}"#;
        let bike: Bike = serde_json::from_str(json).unwrap();
        assert!(bike.image_url.is_none());
        assert!(bike.geometries.is_empty());
    }
}
