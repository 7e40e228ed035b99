use serde::Serialize;

use crate::classification::domain::face_shape_classifier::{ClassProbability, FaceShapeClassifier};
use crate::features::domain::feature_extractor::extract_features;
use crate::features::domain::feature_vector::FeatureVector;
use crate::features::domain::landmark::LandmarkSet;
use crate::recommendation::recommendation_resolver::recommend;
use crate::recommendation::recommendation_set::RecommendationSet;
use crate::shared::error::FaceShapeError;
use crate::shared::face_shape::FaceShapeLabel;

/// Outcome of analysing one detection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FaceAnalysis {
    pub face_shape: FaceShapeLabel,
    /// `None` when no face was detected.
    pub features: Option<FeatureVector>,
    /// Per-label confidence, when the classifier reports one.
    pub probabilities: Option<Vec<ClassProbability>>,
    pub recommendations: RecommendationSet,
}

/// Single-detection pipeline: landmarks → features → label → recommendations.
///
/// Holds only the configured classifier, so one instance can serve
/// concurrent requests behind an `Arc`.
pub struct ClassifyFaceUseCase {
    classifier: Box<dyn FaceShapeClassifier>,
}

impl ClassifyFaceUseCase {
    pub fn new(classifier: Box<dyn FaceShapeClassifier>) -> Self {
        Self { classifier }
    }

    /// `None` means the landmark provider found no face.
    pub fn classify_face(
        &self,
        landmarks: Option<&LandmarkSet>,
    ) -> Result<FaceShapeLabel, FaceShapeError> {
        Ok(self.analyse(landmarks)?.0)
    }

    pub fn execute(&self, landmarks: Option<&LandmarkSet>) -> Result<FaceAnalysis, FaceShapeError> {
        let (face_shape, features) = self.analyse(landmarks)?;
        let probabilities = match &features {
            Some(features) => self.classifier.probabilities(features)?,
            None => None,
        };
        Ok(FaceAnalysis {
            face_shape,
            features,
            probabilities,
            recommendations: recommend(face_shape),
        })
    }

    fn analyse(
        &self,
        landmarks: Option<&LandmarkSet>,
    ) -> Result<(FaceShapeLabel, Option<FeatureVector>), FaceShapeError> {
        let Some(landmarks) = landmarks else {
            log::debug!("No face detected");
            return Ok((FaceShapeLabel::NoneDetected, None));
        };

        let features = extract_features(landmarks)?;
        let label = self.classifier.classify(&features)?;
        log::debug!("Classified face as {label} ({})", self.classifier.name());
        Ok((label, Some(features)))
    }
}
