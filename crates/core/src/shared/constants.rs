/// Directory name used under the platform config and cache directories.
pub const APP_DIR_NAME: &str = "FaceShape";

/// Default file name of the persisted scaler + model blob.
pub const ARTIFACT_NAME: &str = "face_shape_classifier.json";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Number of components in a feature vector.
pub const FEATURE_COUNT: usize = 4;

/// Landmark count produced by the 468-point face mesh model.
pub const FACE_MESH_LANDMARK_COUNT: usize = 468;
