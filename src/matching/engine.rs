use serde::Serialize;

use crate::catalog::store::BikeCatalog;
use crate::core::bike::Bike;
use crate::core::geometry::{FitDeviation, Geometry};
use crate::core::types::MatchQuality;
use crate::matching::scoring::best_fit;

/// Default distance (mm) within which a match counts as precise
pub const DEFAULT_TOLERANCE_MM: f64 = 10.0;

/// Best-fitting size of one bike for a query
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    /// The matched bike
    pub bike: Bike,

    /// The size closest to the query
    pub geometry: Geometry,

    pub target_stack: f64,
    pub target_reach: f64,

    /// Euclidean stack/reach distance between `geometry` and the target
    pub distance: f64,

    pub quality: MatchQuality,
}

impl MatchResult {
    /// Best size of `bike` for the target, or `None` if the bike has no geometry
    pub fn for_bike(
        bike: &Bike,
        target_stack: f64,
        target_reach: f64,
        tolerance: f64,
    ) -> Option<Self> {
        let (geometry, distance) = best_fit(&bike.geometries, target_stack, target_reach)?;

        Some(Self {
            bike: bike.clone(),
            geometry: geometry.clone(),
            target_stack,
            target_reach,
            distance,
            quality: MatchQuality::classify(distance, tolerance),
        })
    }

    #[must_use]
    pub fn is_precise(&self) -> bool {
        self.quality.is_precise()
    }

    /// How far the matched size is from the target on each axis
    #[must_use]
    pub fn deviation(&self) -> FitDeviation {
        self.geometry.deviation_from(self.target_stack, self.target_reach)
    }
}

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Distance (mm) at or below which a match is classified as precise
    pub tolerance: f64,
    /// Maximum number of results to return, after ranking
    pub limit: Option<usize>,
    /// Drop approximate results instead of just labelling them
    pub precise_only: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE_MM,
            limit: None,
            precise_only: false,
        }
    }
}

/// Rank bikes by how well their best size fits a stack/reach target.
///
/// One result per bike that has at least one size, ordered by ascending
/// distance. Bikes at equal distance keep their order in `bikes`.
#[must_use]
pub fn match_bikes(
    bikes: &[Bike],
    target_stack: f64,
    target_reach: f64,
    tolerance: f64,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = bikes
        .iter()
        .filter_map(|bike| MatchResult::for_bike(bike, target_stack, target_reach, tolerance))
        .collect();

    // sort_by is stable, so catalog order breaks ties
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    results
}

/// The main matching engine
pub struct GeometryMatcher<'a> {
    catalog: &'a BikeCatalog,
    config: MatchingConfig,
}

impl<'a> GeometryMatcher<'a> {
    /// Create a new matcher with default configuration
    pub fn new(catalog: &'a BikeCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matcher with custom configuration
    pub fn with_config(catalog: &'a BikeCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Find the best size of every bike for the target, best fits first
    pub fn find_matches(&self, target_stack: f64, target_reach: f64) -> Vec<MatchResult> {
        let mut results = match_bikes(
            self.catalog.bikes(),
            target_stack,
            target_reach,
            self.config.tolerance,
        );

        if self.config.precise_only {
            results.retain(MatchResult::is_precise);
        }
        if let Some(limit) = self.config.limit {
            results.truncate(limit);
        }
        results
    }

    /// Find the single best match
    pub fn find_best_match(&self, target_stack: f64, target_reach: f64) -> Option<MatchResult> {
        self.find_matches(target_stack, target_reach)
            .into_iter()
            .next()
    }
}
