use serde::Serialize;

use crate::features::domain::feature_vector::FeatureVector;
use crate::shared::face_shape::FaceShapeLabel;

use super::classification_error::ClassificationError;

/// Model confidence for one label.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassProbability {
    pub face_shape: FaceShapeLabel,
    pub probability: f64,
}

/// Domain interface for face-shape classification strategies.
///
/// Implementations are deterministic and hold no per-request state, so a
/// single instance is shared across concurrent callers.
pub trait FaceShapeClassifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> Result<FaceShapeLabel, ClassificationError>;

    /// Per-label probabilities. `None` for strategies without a notion of
    /// confidence.
    fn probabilities(
        &self,
        _features: &FeatureVector,
    ) -> Result<Option<Vec<ClassProbability>>, ClassificationError> {
        Ok(None)
    }

    /// Short strategy name for logs.
    fn name(&self) -> &'static str;
}
