use serde::{Deserialize, Serialize};

/// Frame geometry for one size of a bike model.
///
/// Lengths are in millimetres, angles in degrees. Stack and reach are the only
/// fields used for matching; the rest is carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    /// Size label as printed by the manufacturer (e.g. "M", "54")
    pub size_label: String,

    /// Vertical distance from bottom bracket to the top of the head tube
    pub stack: f64,

    /// Horizontal distance from bottom bracket to the top of the head tube
    pub reach: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_tube_length: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_tube_angle: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_tube_angle: Option<f64>,
}

/// Signed difference between a geometry and a requested fit (geometry minus target)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitDeviation {
    pub stack: f64,
    pub reach: f64,
}

impl Geometry {
    pub fn new(size_label: impl Into<String>, stack: f64, reach: f64) -> Self {
        Self {
            size_label: size_label.into(),
            stack,
            reach,
            top_tube_length: None,
            seat_tube_angle: None,
            head_tube_angle: None,
        }
    }

    #[must_use]
    pub fn with_top_tube(mut self, length: f64) -> Self {
        self.top_tube_length = Some(length);
        self
    }

    #[must_use]
    pub fn with_angles(mut self, seat_tube: f64, head_tube: f64) -> Self {
        self.seat_tube_angle = Some(seat_tube);
        self.head_tube_angle = Some(head_tube);
        self
    }

    /// Euclidean distance in the stack/reach plane
    #[must_use]
    pub fn distance_to(&self, stack: f64, reach: f64) -> f64 {
        let deviation = self.deviation_from(stack, reach);
        deviation.stack.hypot(deviation.reach)
    }

    #[must_use]
    pub fn deviation_from(&self, stack: f64, reach: f64) -> FitDeviation {
        FitDeviation {
            stack: self.stack - stack,
            reach: self.reach - reach,
        }
    }
}
