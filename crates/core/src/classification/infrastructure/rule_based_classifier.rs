use crate::classification::domain::classification_error::ClassificationError;
use crate::classification::domain::face_shape_classifier::FaceShapeClassifier;
use crate::features::domain::feature_vector::FeatureVector;
use crate::shared::face_shape::FaceShapeLabel;

/// Height/width above this is oblong.
pub const OBLONG_MIN_HEIGHT_RATIO: f64 = 1.15;
/// Height/width below this is round.
pub const ROUND_MAX_HEIGHT_RATIO: f64 = 0.85;
/// Jaw/face width below this is heart.
pub const HEART_MAX_JAW_RATIO: f64 = 0.78;
/// Jaw/face width above this is square.
pub const SQUARE_MIN_JAW_RATIO: f64 = 0.85;

/// Threshold cascade over height/width and jaw/face-width ratios.
///
/// Evaluated top to bottom with strict inequalities; the first matching
/// rule wins and anything left over is oval. The cheekbone and forehead
/// ratios are not consulted.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl FaceShapeClassifier for RuleBasedClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<FaceShapeLabel, ClassificationError> {
        if !features.is_finite() {
            return Err(ClassificationError::NonFiniteFeatures(format!("{features:?}")));
        }
        let ratio = features.height_width_ratio;
        let jaw_ratio = features.jaw_width_ratio;

        let label = if ratio > OBLONG_MIN_HEIGHT_RATIO {
            FaceShapeLabel::Oblong
        } else if ratio < ROUND_MAX_HEIGHT_RATIO {
            FaceShapeLabel::Round
        } else if jaw_ratio < HEART_MAX_JAW_RATIO {
            FaceShapeLabel::Heart
        } else if jaw_ratio > SQUARE_MIN_JAW_RATIO {
            FaceShapeLabel::Square
        } else {
            FaceShapeLabel::Oval
        };
        Ok(label)
    }

    fn name(&self) -> &'static str {
        "rule-based"
    }
}
