use ndarray::Array1;

use crate::classification::domain::classification_error::ClassificationError;
use crate::classification::domain::face_shape_classifier::{ClassProbability, FaceShapeClassifier};
use crate::features::domain::feature_vector::FeatureVector;
use crate::shared::face_shape::FaceShapeLabel;

use super::feature_scaler::FeatureScaler;
use super::linear_model::LinearModel;

/// A scaler and model that were checked against each other at load time.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifierArtifacts {
    scaler: FeatureScaler,
    model: LinearModel,
}

impl ClassifierArtifacts {
    pub fn new(scaler: FeatureScaler, model: LinearModel) -> Result<Self, ClassificationError> {
        if scaler.n_features() != model.n_features() {
            return Err(ClassificationError::ModelIncompatible(format!(
                "scaler has {} features but model expects {}",
                scaler.n_features(),
                model.n_features()
            )));
        }
        Ok(Self { scaler, model })
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }
}

/// Classifies by scaling features and delegating to a trained model.
///
/// Constructed empty and attached to artifacts before use; classifying
/// without artifacts fails with [`ClassificationError::ModelNotLoaded`].
#[derive(Clone, Debug, Default)]
pub struct StatisticalClassifier {
    artifacts: Option<ClassifierArtifacts>,
}

impl StatisticalClassifier {
    pub fn new(artifacts: ClassifierArtifacts) -> Self {
        Self {
            artifacts: Some(artifacts),
        }
    }

    pub fn unloaded() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, artifacts: ClassifierArtifacts) {
        self.artifacts = Some(artifacts);
    }

    pub fn is_loaded(&self) -> bool {
        self.artifacts.is_some()
    }

    fn artifacts(&self) -> Result<&ClassifierArtifacts, ClassificationError> {
        self.artifacts
            .as_ref()
            .ok_or(ClassificationError::ModelNotLoaded)
    }

    /// Scaled model input. Non-finite values would collapse every decision
    /// to NaN, so they are rejected instead of predicted on.
    fn scaled(
        artifacts: &ClassifierArtifacts,
        features: &FeatureVector,
    ) -> Result<Array1<f64>, ClassificationError> {
        if !features.is_finite() {
            return Err(ClassificationError::NonFiniteFeatures(format!("{features:?}")));
        }
        let scaled = artifacts.scaler.transform(features);
        if scaled.iter().any(|v| !v.is_finite()) {
            return Err(ClassificationError::NonFiniteFeatures(format!(
                "scaling {features:?} gave {scaled}"
            )));
        }
        Ok(scaled)
    }
}

impl FaceShapeClassifier for StatisticalClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<FaceShapeLabel, ClassificationError> {
        let artifacts = self.artifacts()?;
        let scaled = Self::scaled(artifacts, features)?;
        Ok(artifacts.model.predict(scaled.view()))
    }

    fn probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<Option<Vec<ClassProbability>>, ClassificationError> {
        let artifacts = self.artifacts()?;
        let scaled = Self::scaled(artifacts, features)?;
        let probabilities = artifacts
            .model
            .predict_proba(scaled.view())
            .into_iter()
            .map(|(face_shape, probability)| ClassProbability {
                face_shape,
                probability,
            })
            .collect();
        Ok(Some(probabilities))
    }

    fn name(&self) -> &'static str {
        "statistical"
    }
}
