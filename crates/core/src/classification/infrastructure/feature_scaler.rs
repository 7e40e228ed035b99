use ndarray::{Array1, ArrayView1};

use crate::classification::domain::classification_error::ClassificationError;
use crate::features::domain::feature_vector::FeatureVector;
use crate::shared::constants::FEATURE_COUNT;

/// Pre-fitted affine normalization: `scaled = (feature - mean) / scale`.
///
/// Parameters come from training and are never refit at inference time.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl FeatureScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ClassificationError> {
        if mean.len() != FEATURE_COUNT || scale.len() != FEATURE_COUNT {
            return Err(ClassificationError::ModelIncompatible(format!(
                "scaler expects {FEATURE_COUNT} features, got mean={} scale={}",
                mean.len(),
                scale.len()
            )));
        }
        if mean.iter().any(|m| !m.is_finite()) {
            return Err(ClassificationError::ModelIncompatible(
                "scaler mean contains non-finite values".into(),
            ));
        }
        if scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(ClassificationError::ModelIncompatible(
                "scaler scale must be finite and non-zero".into(),
            ));
        }
        Ok(Self {
            mean: Array1::from(mean),
            scale: Array1::from(scale),
        })
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn transform(&self, features: &FeatureVector) -> Array1<f64> {
        let x = Array1::from(features.to_array().to_vec());
        (&x - &self.mean) / &self.scale
    }

    pub fn inverse_transform(
        &self,
        scaled: ArrayView1<f64>,
    ) -> Result<FeatureVector, ClassificationError> {
        if scaled.len() != self.n_features() {
            return Err(ClassificationError::ModelIncompatible(format!(
                "expected {} scaled features, got {}",
                self.n_features(),
                scaled.len()
            )));
        }
        let raw = &scaled * &self.scale + &self.mean;
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, value) in values.iter_mut().zip(raw.iter()) {
            *slot = *value;
        }
        Ok(FeatureVector::from_array(values))
    }
}
