use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub const ALL: &[Gender] = &[Gender::Male, Gender::Female, Gender::Unisex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unisex => "unisex",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Gender must be one of: male, female, unisex, got '{s}'"))
    }
}

/// One purchasable frame.
///
/// Columns the engine does not interpret (model name, image URL, ...) are
/// kept verbatim in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub brand: String,
    pub frame_shape: String,
    pub price: f64,
    pub gender: Gender,
    pub age_group: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FrameRecord {
    pub fn new(
        brand: impl Into<String>,
        frame_shape: impl Into<String>,
        price: f64,
        gender: Gender,
        age_group: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            frame_shape: frame_shape.into(),
            price,
            gender,
            age_group: age_group.into(),
            extra: serde_json::Map::new(),
        }
    }
}
