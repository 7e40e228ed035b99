pub mod artifact_loader;
pub mod artifact_resolver;
pub mod classifier_factory;
pub mod feature_scaler;
pub mod linear_model;
pub mod rule_based_classifier;
pub mod statistical_classifier;
