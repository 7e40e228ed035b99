use crate::shared::face_shape::{FaceShapeLabel, UnknownLabel};

use super::recommendation_set::{RecommendationSet, StyleRecommendation};
use super::style_table::{describe, recommended_styles};

/// Looks up the ranked styles for a label. The sentinel yields an empty set.
pub fn recommend(label: FaceShapeLabel) -> RecommendationSet {
    let recommendations = recommended_styles(label)
        .iter()
        .map(|&style| StyleRecommendation {
            style,
            description: describe(style),
        })
        .collect();
    RecommendationSet::new(label, recommendations)
}

/// Resolves an untrusted label string, e.g. from a request path.
pub fn recommend_by_name(name: &str) -> Result<RecommendationSet, UnknownLabel> {
    let label = name.parse::<FaceShapeLabel>()?;
    Ok(recommend(label))
}
