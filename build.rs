use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/fallback_bikes.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         The fallback catalog is embedded in the binary and must exist.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    let bikes = catalog.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Root must be a JSON array of bikes\n\
             Got: {catalog}\n"
        );
    });
    assert!(
        !bikes.is_empty(),
        "\n\nCATALOG BUILD ERROR: Fallback catalog has no bikes\n"
    );

    let total_sizes = validate_bikes(bikes);

    println!(
        "cargo:warning=Validated fallback catalog: {} bikes, {total_sizes} sizes",
        bikes.len()
    );
}

fn validate_bikes(bikes: &[serde_json::Value]) -> usize {
    let mut total_sizes = 0;
    let mut seen_ids = HashSet::new();

    for (i, bike) in bikes.iter().enumerate() {
        let bike_id = bike
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Bike at index {i} missing string 'id' field\n")
            });

        assert!(
            seen_ids.insert(bike_id.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate bike id '{bike_id}'\n"
        );

        validate_bike_fields(bike, bike_id, i);
        total_sizes += validate_bike_geometries(bike, bike_id);
    }

    total_sizes
}

fn validate_bike_fields(bike: &serde_json::Value, bike_id: &str, index: usize) {
    for field in ["brand", "modelName"] {
        assert!(
            bike.get(field).and_then(serde_json::Value::as_str).is_some(),
            "\n\nCATALOG BUILD ERROR: Bike '{bike_id}' (index {index}) missing '{field}' field\n"
        );
    }

    let price = bike.get("price").and_then(serde_json::Value::as_f64);
    assert!(
        price.is_some_and(|p| p > 0.0),
        "\n\nCATALOG BUILD ERROR: Bike '{bike_id}' (index {index}) needs a positive 'price'\n"
    );
}

fn validate_bike_geometries(bike: &serde_json::Value, bike_id: &str) -> usize {
    let geometries = bike
        .get("geometries")
        .and_then(|g| g.as_array())
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Bike '{bike_id}' missing 'geometries' array\n")
        });

    // Every embedded bike must be matchable
    assert!(
        !geometries.is_empty(),
        "\n\nCATALOG BUILD ERROR: Bike '{bike_id}' has no geometries\n"
    );

    let mut seen_sizes = HashSet::new();
    for (j, geometry) in geometries.iter().enumerate() {
        let size = geometry
            .get("sizeLabel")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Bike '{bike_id}' geometry {j} missing 'sizeLabel'\n")
            });

        assert!(
            seen_sizes.insert(size.to_string()),
            "\n\nCATALOG BUILD ERROR: Bike '{bike_id}' lists size '{size}' twice\n"
        );

        for field in ["stack", "reach"] {
            let value = geometry.get(field).and_then(serde_json::Value::as_f64);
            assert!(
                value.is_some_and(|v| v > 0.0),
                "\n\nCATALOG BUILD ERROR: Bike '{bike_id}' size '{size}' needs a positive '{field}'\n"
            );
        }
    }

    geometries.len()
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/fallback_bikes.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
