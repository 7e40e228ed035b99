use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassificationError {
    #[error("classifier artifacts are not loaded")]
    ModelNotLoaded,
    #[error("classifier artifacts are incompatible: {0}")]
    ModelIncompatible(String),
    #[error("cannot classify non-finite features: {0}")]
    NonFiniteFeatures(String),
}
