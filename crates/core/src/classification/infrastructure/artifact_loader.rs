use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classification::domain::classification_error::ClassificationError;
use crate::features::domain::feature_vector::FEATURE_NAMES;
use crate::shared::face_shape::FaceShapeLabel;

use super::feature_scaler::FeatureScaler;
use super::linear_model::LinearModel;
use super::statistical_classifier::ClassifierArtifacts;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("failed to read classifier artifacts from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse classifier artifacts: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Incompatible(#[from] ClassificationError),
}

/// On-disk layout of the scaler + model blob.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtifactDocument {
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub scaler: ScalerParams,
    pub model: ModelParams,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub classes: Vec<String>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl ArtifactDocument {
    /// Validates the pair as one unit and builds the runtime artifacts.
    pub fn into_artifacts(self) -> Result<ClassifierArtifacts, ClassificationError> {
        if let Some(names) = &self.feature_names {
            if names.iter().map(String::as_str).ne(FEATURE_NAMES.iter().copied()) {
                return Err(ClassificationError::ModelIncompatible(format!(
                    "feature order {names:?} does not match {FEATURE_NAMES:?}"
                )));
            }
        }

        let classes = self
            .model
            .classes
            .iter()
            .map(|name| {
                name.parse::<FaceShapeLabel>().map_err(|_| {
                    ClassificationError::ModelIncompatible(format!(
                        "model label '{name}' is not a known face shape"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let scaler = FeatureScaler::new(self.scaler.mean, self.scaler.scale)?;
        let model = LinearModel::new(classes, self.model.coefficients, self.model.intercepts)?;
        ClassifierArtifacts::new(scaler, model)
    }
}

pub fn parse_artifacts(json: &str) -> Result<ClassifierArtifacts, ArtifactError> {
    let document: ArtifactDocument = serde_json::from_str(json)?;
    Ok(document.into_artifacts()?)
}

pub fn load_artifacts(path: &Path) -> Result<ClassifierArtifacts, ArtifactError> {
    let json = fs::read_to_string(path).map_err(|e| ArtifactError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let artifacts = parse_artifacts(&json)?;
    log::info!(
        "Loaded classifier artifacts from {} (classes: {:?})",
        path.display(),
        artifacts.model().classes()
    );
    Ok(artifacts)
}
