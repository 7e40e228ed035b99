//! Face-mesh landmark geometry to [`FeatureVector`].
//!
//! Widths are signed x-differences and heights signed y-differences between
//! fixed mesh indices; no absolute value is taken.

use thiserror::Error;

use super::feature_vector::FeatureVector;
use super::landmark::LandmarkSet;

const FOREHEAD_TOP: usize = 10;
const CHIN: usize = 152;
const LEFT_TEMPLE: usize = 234;
const RIGHT_TEMPLE: usize = 454;
const JAW_LEFT: usize = 172;
const JAW_RIGHT: usize = 397;
const CHEEKBONE_LEFT: usize = 123;
const CHEEKBONE_RIGHT: usize = 352;
const FOREHEAD_LEFT: usize = 109;
const FOREHEAD_RIGHT: usize = 338;

/// Mesh indices the extractor reads.
pub const REQUIRED_LANDMARKS: [usize; 10] = [
    FOREHEAD_TOP,
    CHIN,
    LEFT_TEMPLE,
    RIGHT_TEMPLE,
    JAW_LEFT,
    JAW_RIGHT,
    CHEEKBONE_LEFT,
    CHEEKBONE_RIGHT,
    FOREHEAD_LEFT,
    FOREHEAD_RIGHT,
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("missing required landmarks: {missing:?}")]
    MissingLandmarks { missing: Vec<usize> },
    #[error("degenerate landmark geometry: {denominator} is zero")]
    DivisionByZero { denominator: &'static str },
    #[error("landmark {index} has non-finite coordinates")]
    InvalidCoordinate { index: usize },
}

/// Raw distances between the required landmarks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceMeasurements {
    pub face_height: f64,
    pub face_width: f64,
    pub jaw_width: f64,
    pub cheekbone_width: f64,
    pub forehead_width: f64,
}

impl FaceMeasurements {
    pub fn measure(landmarks: &LandmarkSet) -> Result<Self, ExtractionError> {
        let missing = landmarks.missing(&REQUIRED_LANDMARKS);
        if !missing.is_empty() {
            return Err(ExtractionError::MissingLandmarks { missing });
        }

        let at = |index: usize| {
            landmarks
                .get(index)
                .filter(|lm| lm.is_finite())
                .ok_or(ExtractionError::InvalidCoordinate { index })
        };

        Ok(Self {
            face_height: at(CHIN)?.y - at(FOREHEAD_TOP)?.y,
            face_width: at(RIGHT_TEMPLE)?.x - at(LEFT_TEMPLE)?.x,
            jaw_width: at(JAW_LEFT)?.x - at(JAW_RIGHT)?.x,
            cheekbone_width: at(CHEEKBONE_LEFT)?.x - at(CHEEKBONE_RIGHT)?.x,
            forehead_width: at(FOREHEAD_LEFT)?.x - at(FOREHEAD_RIGHT)?.x,
        })
    }

    pub fn ratios(&self) -> Result<FeatureVector, ExtractionError> {
        Ok(FeatureVector::new(
            ratio(self.face_height, self.face_width, "face_width")?,
            ratio(self.jaw_width, self.face_width, "face_width")?,
            ratio(self.cheekbone_width, self.jaw_width, "jaw_width")?,
            ratio(self.forehead_width, self.jaw_width, "jaw_width")?,
        ))
    }
}

/// Computes the feature vector for one detection.
pub fn extract_features(landmarks: &LandmarkSet) -> Result<FeatureVector, ExtractionError> {
    let measurements = FaceMeasurements::measure(landmarks)?;
    let features = measurements.ratios()?;
    log::debug!("Extracted features: {features:?}");
    Ok(features)
}

/// A denominator so small that the quotient overflows counts as zero.
fn ratio(numerator: f64, denominator: f64, name: &'static str) -> Result<f64, ExtractionError> {
    let value = numerator / denominator;
    if denominator == 0.0 || !value.is_finite() {
        return Err(ExtractionError::DivisionByZero { denominator: name });
    }
    Ok(value)
}
