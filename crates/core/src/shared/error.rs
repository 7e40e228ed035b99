use thiserror::Error;

use crate::classification::domain::classification_error::ClassificationError;
use crate::features::domain::feature_extractor::ExtractionError;

/// Per-request failure of the landmarks → label pipeline.
///
/// Every variant is permanent for the given input; callers must not retry
/// with the same landmarks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FaceShapeError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Classification(#[from] ClassificationError),
}
