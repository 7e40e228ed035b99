use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classification::domain::face_shape_classifier::FaceShapeClassifier;

use super::artifact_loader::{load_artifacts, ArtifactError};
use super::rule_based_classifier::RuleBasedClassifier;
use super::statistical_classifier::StatisticalClassifier;

/// Deployment-time classifier strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    #[default]
    Rule,
    Statistical,
}

impl ClassifierKind {
    pub const ALL: &[ClassifierKind] = &[ClassifierKind::Rule, ClassifierKind::Statistical];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierKind::Rule => "rule",
            ClassifierKind::Statistical => "statistical",
        }
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassifierKind::ALL
            .iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Classifier must be 'rule' or 'statistical', got '{s}'"))
    }
}

/// Creates the configured classifier.
///
/// The statistical variant loads and validates its artifacts here, so a
/// mismatched scaler/model pair fails at startup. Without an artifact path
/// it is returned unloaded and every `classify` call reports
/// `ModelNotLoaded`.
pub fn create_classifier(
    kind: ClassifierKind,
    artifact_path: Option<&Path>,
) -> Result<Box<dyn FaceShapeClassifier>, ArtifactError> {
    match kind {
        ClassifierKind::Rule => {
            log::info!("Using rule-based face shape classifier");
            Ok(Box::new(RuleBasedClassifier::new()))
        }
        ClassifierKind::Statistical => match artifact_path {
            Some(path) => {
                let artifacts = load_artifacts(path)?;
                log::info!("Using statistical face shape classifier ({})", path.display());
                Ok(Box::new(StatisticalClassifier::new(artifacts)))
            }
            None => {
                log::warn!("Statistical classifier selected without artifacts; classification will fail");
                Ok(Box::new(StatisticalClassifier::unloaded()))
            }
        },
    }
}
