use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown face shape label: '{0}'")]
pub struct UnknownLabel(pub String);

/// Classification outcome for a face.
///
/// `NoneDetected` is the sentinel for "no face found" and is never produced
/// by a classifier; it is assigned upstream when the landmark provider
/// reports no face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceShapeLabel {
    Round,
    Square,
    Oval,
    Heart,
    Oblong,
    NoneDetected,
}

impl FaceShapeLabel {
    /// Every label a classifier may return.
    pub const CLASSIFIED: &[FaceShapeLabel] = &[
        FaceShapeLabel::Round,
        FaceShapeLabel::Square,
        FaceShapeLabel::Oval,
        FaceShapeLabel::Heart,
        FaceShapeLabel::Oblong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceShapeLabel::Round => "round",
            FaceShapeLabel::Square => "square",
            FaceShapeLabel::Oval => "oval",
            FaceShapeLabel::Heart => "heart",
            FaceShapeLabel::Oblong => "oblong",
            FaceShapeLabel::NoneDetected => "none_detected",
        }
    }

    pub fn is_detected(&self) -> bool {
        *self != FaceShapeLabel::NoneDetected
    }
}

impl fmt::Display for FaceShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaceShapeLabel {
    type Err = UnknownLabel;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        FaceShapeLabel::CLASSIFIED
            .iter()
            .chain(std::iter::once(&FaceShapeLabel::NoneDetected))
            .find(|label| label.as_str() == normalized)
            .copied()
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}
