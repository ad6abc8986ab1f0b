use serde::{Deserialize, Serialize};

/// Unique identifier for a bike in the catalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BikeId(pub String);

impl BikeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BikeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BikeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// How closely a matched size fits the requested stack/reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    /// Within the configured tolerance
    Precise,
    /// Best available size, but outside the tolerance
    Approximate,
}

impl MatchQuality {
    /// Classify a distance against a tolerance. The tolerance itself is inclusive.
    #[must_use]
    pub fn classify(distance: f64, tolerance: f64) -> Self {
        if distance <= tolerance {
            Self::Precise
        } else {
            Self::Approximate
        }
    }

    #[must_use]
    pub fn is_precise(self) -> bool {
        matches!(self, Self::Precise)
    }
}

impl std::fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Precise => write!(f, "PRECISE"),
            Self::Approximate => write!(f, "APPROXIMATE"),
        }
    }
}
