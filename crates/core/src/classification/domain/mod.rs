pub mod classification_error;
pub mod face_shape_classifier;
