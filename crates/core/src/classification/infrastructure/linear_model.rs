//! Linear discriminative model over scaled features.
//!
//! Uses the multinomial / one-vs-rest logistic regression layout: one
//! coefficient row and intercept per class, prediction is the arg-max of
//! the decision values. The two-class layout stores a single row whose
//! positive side selects the second class.

use std::collections::HashSet;

use ndarray::{Array1, Array2, ArrayView1};

use crate::classification::domain::classification_error::ClassificationError;
use crate::shared::constants::FEATURE_COUNT;
use crate::shared::face_shape::FaceShapeLabel;

#[derive(Clone, Debug, PartialEq)]
pub struct LinearModel {
    classes: Vec<FaceShapeLabel>,
    coefficients: Array2<f64>,
    intercepts: Array1<f64>,
}

impl LinearModel {
    pub fn new(
        classes: Vec<FaceShapeLabel>,
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    ) -> Result<Self, ClassificationError> {
        validate_classes(&classes)?;

        let rows = coefficients.len();
        let binary = classes.len() == 2 && rows == 1;
        if !binary && rows != classes.len() {
            return Err(incompatible(format!(
                "{rows} coefficient rows for {} classes",
                classes.len()
            )));
        }
        if intercepts.len() != rows {
            return Err(incompatible(format!(
                "{} intercepts for {rows} coefficient rows",
                intercepts.len()
            )));
        }
        if let Some(row) = coefficients.iter().find(|r| r.len() != FEATURE_COUNT) {
            return Err(incompatible(format!(
                "coefficient row has {} features, expected {FEATURE_COUNT}",
                row.len()
            )));
        }
        let finite = coefficients.iter().flatten().chain(intercepts.iter()).all(|v| v.is_finite());
        if !finite {
            return Err(incompatible("model parameters contain non-finite values".into()));
        }

        let flat: Vec<f64> = coefficients.into_iter().flatten().collect();
        let coefficients = Array2::from_shape_vec((rows, FEATURE_COUNT), flat)
            .map_err(|e| incompatible(e.to_string()))?;

        Ok(Self {
            classes,
            coefficients,
            intercepts: Array1::from(intercepts),
        })
    }

    pub fn classes(&self) -> &[FaceShapeLabel] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.ncols()
    }

    fn is_binary(&self) -> bool {
        self.coefficients.nrows() == 1 && self.classes.len() == 2
    }

    /// One decision value per coefficient row.
    pub fn decision_function(&self, x: ArrayView1<f64>) -> Array1<f64> {
        self.coefficients.dot(&x) + &self.intercepts
    }

    /// Single-sample prediction. Ties go to the earlier class.
    pub fn predict(&self, x: ArrayView1<f64>) -> FaceShapeLabel {
        let decision = self.decision_function(x);
        if self.is_binary() {
            return if decision[0] > 0.0 {
                self.classes[1]
            } else {
                self.classes[0]
            };
        }

        let mut best = 0;
        for (idx, value) in decision.iter().enumerate().skip(1) {
            if *value > decision[best] {
                best = idx;
            }
        }
        self.classes[best]
    }

    /// Class probabilities in [`Self::classes`] order.
    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Vec<(FaceShapeLabel, f64)> {
        let decision = self.decision_function(x);
        if self.is_binary() {
            let positive = 1.0 / (1.0 + (-decision[0]).exp());
            return vec![
                (self.classes[0], 1.0 - positive),
                (self.classes[1], positive),
            ];
        }

        let max = decision.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        let exp = decision.mapv(|v| (v - max).exp());
        let total = exp.sum();
        self.classes
            .iter()
            .zip(exp.iter())
            .map(|(label, e)| (*label, e / total))
            .collect()
    }
}

fn validate_classes(classes: &[FaceShapeLabel]) -> Result<(), ClassificationError> {
    if classes.is_empty() {
        return Err(incompatible("model has no classes".into()));
    }
    if classes.contains(&FaceShapeLabel::NoneDetected) {
        return Err(incompatible(
            "model label set contains the none_detected sentinel".into(),
        ));
    }
    let unique: HashSet<_> = classes.iter().collect();
    if unique.len() != classes.len() {
        return Err(incompatible("model label set contains duplicates".into()));
    }
    Ok(())
}

fn incompatible(message: String) -> ClassificationError {
    ClassificationError::ModelIncompatible(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    use FaceShapeLabel::*;

    /// Each class fires on one scaled component.
    fn multiclass() -> LinearModel {
        LinearModel::new(
            vec![Oblong, Round, Heart, Square],
            vec![
                vec![1.0, 0.0, 0.0, 0.0],
                vec![-1.0, 0.0, 0.0, 0.0],
                vec![0.0, -1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0, 0.0],
            ],
            vec![0.0, 0.0, 0.0, 0.0],
        )
        .unwrap()
    }

    fn binary() -> LinearModel {
        LinearModel::new(vec![Oval, Oblong], vec![vec![2.0, 0.0, 0.0, 0.0]], vec![-1.0]).unwrap()
    }

    #[rstest]
    #[case::long_face(array![2.0, 0.0, 0.0, 0.0], Oblong)]
    #[case::short_face(array![-2.0, 0.5, 0.0, 0.0], Round)]
    #[case::narrow_jaw(array![0.1, -3.0, 0.0, 0.0], Heart)]
    #[case::wide_jaw(array![0.1, 3.0, 0.0, 0.0], Square)]
    fn test_predict_argmax(#[case] x: Array1<f64>, #[case] expected: FaceShapeLabel) {
        assert_eq!(multiclass().predict(x.view()), expected);
    }

    #[test]
    fn test_predict_tie_goes_to_first_class() {
        assert_eq!(multiclass().predict(array![0.0, 0.0, 0.0, 0.0].view()), Oblong);
    }

    #[rstest]
    #[case::positive(array![1.0, 0.0, 0.0, 0.0], Oblong)]
    #[case::negative(array![0.0, 0.0, 0.0, 0.0], Oval)]
    #[case::exactly_zero(array![0.5, 0.0, 0.0, 0.0], Oval)]
    fn test_predict_binary_layout(#[case] x: Array1<f64>, #[case] expected: FaceShapeLabel) {
        assert_eq!(binary().predict(x.view()), expected);
    }

    #[test]
    fn test_decision_function() {
        let d = binary().decision_function(array![1.5, 9.0, 9.0, 9.0].view());
        assert_eq!(d.len(), 1);
        assert_relative_eq!(d[0], 2.0);
    }

    #[test]
    fn test_predict_proba_sums_to_one() {
        let proba = multiclass().predict_proba(array![0.3, -0.7, 0.2, 0.0].view());
        let total: f64 = proba.iter().map(|(_, p)| p).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        let best = proba
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(label, _)| *label);
        assert_eq!(best, Some(Heart));
    }

    #[test]
    fn test_predict_proba_binary_is_logistic() {
        let proba = binary().predict_proba(array![0.5, 0.0, 0.0, 0.0].view());
        assert_eq!(proba[0].0, Oval);
        assert_relative_eq!(proba[0].1, 0.5);
        assert_relative_eq!(proba[1].1, 0.5);
    }

    // ── load-time validation ────────────────────────────────────────

    #[rstest]
    #[case::no_classes(vec![], vec![], vec![])]
    #[case::sentinel_class(vec![Round, NoneDetected], vec![vec![0.0; 4]; 2], vec![0.0; 2])]
    #[case::duplicate_class(vec![Round, Round], vec![vec![0.0; 4]; 2], vec![0.0; 2])]
    #[case::row_count_mismatch(vec![Round, Oval, Heart], vec![vec![0.0; 4]; 2], vec![0.0; 2])]
    #[case::intercept_mismatch(vec![Round, Oval, Heart], vec![vec![0.0; 4]; 3], vec![0.0; 2])]
    #[case::short_row(vec![Round, Oval, Heart], vec![vec![0.0; 4], vec![0.0; 3], vec![0.0; 4]], vec![0.0; 3])]
    #[case::nan_coefficient(vec![Round, Oval], vec![vec![f64::NAN, 0.0, 0.0, 0.0]], vec![0.0])]
    fn test_new_rejects_incompatible_model(
        #[case] classes: Vec<FaceShapeLabel>,
        #[case] coefficients: Vec<Vec<f64>>,
        #[case] intercepts: Vec<f64>,
    ) {
        assert!(matches!(
            LinearModel::new(classes, coefficients, intercepts),
            Err(ClassificationError::ModelIncompatible(_))
        ));
    }

    #[test]
    fn test_subset_of_labels_is_accepted() {
        let model = LinearModel::new(vec![Heart, Oval, Square], vec![vec![0.0; 4]; 3], vec![0.0; 3]);
        assert!(model.is_ok());
        assert_eq!(model.unwrap().n_features(), 4);
    }
}
