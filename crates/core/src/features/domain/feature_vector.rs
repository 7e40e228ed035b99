use serde::{Deserialize, Serialize};

use crate::shared::constants::FEATURE_COUNT;

/// Component names in the order the statistical model was trained on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "height_width_ratio",
    "jaw_width_ratio",
    "cheekbone_jaw_ratio",
    "forehead_jaw_ratio",
];

/// Fixed-order geometric summary of a face.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub height_width_ratio: f64,
    pub jaw_width_ratio: f64,
    pub cheekbone_jaw_ratio: f64,
    pub forehead_jaw_ratio: f64,
}

impl FeatureVector {
    pub fn new(
        height_width_ratio: f64,
        jaw_width_ratio: f64,
        cheekbone_jaw_ratio: f64,
        forehead_jaw_ratio: f64,
    ) -> Self {
        Self {
            height_width_ratio,
            jaw_width_ratio,
            cheekbone_jaw_ratio,
            forehead_jaw_ratio,
        }
    }

    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [hw, jaw, cheek, forehead] = values;
        Self::new(hw, jaw, cheek, forehead)
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Components in [`FEATURE_NAMES`] order.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.height_width_ratio,
            self.jaw_width_ratio,
            self.cheekbone_jaw_ratio,
            self.forehead_jaw_ratio,
        ]
    }
}
