use crate::core::geometry::Geometry;

/// The geometry closest to a stack/reach target.
///
/// Returns `None` for an empty slice. When several sizes are equally close the
/// earliest one in the slice wins.
#[must_use]
pub fn best_fit(geometries: &[Geometry], stack: f64, reach: f64) -> Option<(&Geometry, f64)> {
    let mut best: Option<(&Geometry, f64)> = None;

    for geometry in geometries {
        let distance = geometry.distance_to(stack, reach);
        // Strictly closer only, so the earliest of equal sizes is kept
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((geometry, distance));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_fit_empty() {
        assert!(best_fit(&[], 555.0, 395.0).is_none());
    }

    #[test]
    fn test_best_fit_picks_closest() {
        let sizes = vec![
            Geometry::new("S", 533.0, 385.0),
            Geometry::new("M", 555.0, 395.0),
            Geometry::new("L", 576.0, 405.0),
        ];
        let (geometry, distance) = best_fit(&sizes, 570.0, 400.0).unwrap();
        assert_eq!(geometry.size_label, "L");
        assert!((distance - 61.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_tie_prefers_first_listed() {
        // Both sizes are exactly 10mm from the target
        let a = Geometry::new("A", 545.0, 395.0);
        let b = Geometry::new("B", 565.0, 395.0);

        let forward = vec![a.clone(), b.clone()];
        let (chosen, _) = best_fit(&forward, 555.0, 395.0).unwrap();
        assert_eq!(chosen.size_label, "A");

        let reversed = vec![b, a];
        let (chosen, _) = best_fit(&reversed, 555.0, 395.0).unwrap();
        assert_eq!(chosen.size_label, "B");
    }

    #[test]
    fn test_tie_with_later_closer_size() {
        let sizes = vec![
            Geometry::new("A", 545.0, 395.0),
            Geometry::new("B", 565.0, 395.0),
            Geometry::new("C", 556.0, 395.0),
        ];
        let (chosen, distance) = best_fit(&sizes, 555.0, 395.0).unwrap();
        assert_eq!(chosen.size_label, "C");
        assert!((distance - 1.0).abs() < 1e-9);
    }
}
