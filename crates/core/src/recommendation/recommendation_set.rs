use serde::Serialize;

use crate::shared::face_shape::FaceShapeLabel;
use crate::shared::frame_style::FrameStyle;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StyleRecommendation {
    pub style: FrameStyle,
    pub description: &'static str,
}

/// Ranked frame styles for one face shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecommendationSet {
    face_shape: FaceShapeLabel,
    recommendations: Vec<StyleRecommendation>,
}

impl RecommendationSet {
    pub fn new(face_shape: FaceShapeLabel, recommendations: Vec<StyleRecommendation>) -> Self {
        Self {
            face_shape,
            recommendations,
        }
    }

    pub fn empty(face_shape: FaceShapeLabel) -> Self {
        Self::new(face_shape, Vec::new())
    }

    pub fn face_shape(&self) -> FaceShapeLabel {
        self.face_shape
    }

    pub fn recommendations(&self) -> &[StyleRecommendation] {
        &self.recommendations
    }

    pub fn styles(&self) -> Vec<FrameStyle> {
        self.recommendations.iter().map(|r| r.style).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }
}
