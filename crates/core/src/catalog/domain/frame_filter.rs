//! Catalog filtering. Every supplied constraint must hold; an absent
//! constraint matches everything.

use crate::recommendation::style_table::recommended_styles;
use crate::shared::face_shape::FaceShapeLabel;
use crate::shared::frame_style::FrameStyle;

use super::catalog::Catalog;
use super::frame_record::{FrameRecord, Gender};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameFilter {
    /// A face shape label (expanded to its recommended styles) or a
    /// literal frame shape.
    pub shape: Option<String>,
    /// Explicit style whitelist, e.g. a recommendation set's styles.
    pub styles: Option<Vec<FrameStyle>>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub brand: Option<String>,
    pub gender: Option<Gender>,
    pub age_group: Option<String>,
}

impl FrameFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    pub fn with_styles(mut self, styles: Vec<FrameStyle>) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_age_group(mut self, age_group: impl Into<String>) -> Self {
        self.age_group = Some(age_group.into());
        self
    }

    /// True when no constraint would reject any record.
    pub fn is_empty(&self) -> bool {
        constraint(&self.shape).is_none()
            && self.styles.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && constraint(&self.brand).is_none()
            && self.gender.is_none()
            && constraint(&self.age_group).is_none()
    }

    pub fn matches(&self, record: &FrameRecord) -> bool {
        self.shape_matcher().map_or(true, |m| m.matches(&record.frame_shape))
            && self.matches_fields(record)
    }

    fn matches_fields(&self, record: &FrameRecord) -> bool {
        let styles_ok = self
            .styles
            .as_ref()
            .map_or(true, |styles| styles.iter().any(|s| s.matches(&record.frame_shape)));
        let min_ok = self.min_price.map_or(true, |min| record.price >= min);
        let max_ok = self.max_price.map_or(true, |max| record.price <= max);
        let brand_ok = constraint(&self.brand)
            .map_or(true, |brand| record.brand.to_lowercase() == brand.to_lowercase());
        let gender_ok = self
            .gender
            .map_or(true, |g| record.gender == g || record.gender == Gender::Unisex);
        let age_ok = constraint(&self.age_group).map_or(true, |age| record.age_group == age);

        styles_ok && min_ok && max_ok && brand_ok && gender_ok && age_ok
    }

    fn shape_matcher(&self) -> Option<ShapeMatcher> {
        constraint(&self.shape).map(ShapeMatcher::new)
    }
}

/// Blank text constraints are treated as absent.
fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `shape` resolved once per filter call.
enum ShapeMatcher {
    Styles(&'static [FrameStyle]),
    Literal(String),
}

impl ShapeMatcher {
    fn new(shape: &str) -> Self {
        match shape.parse::<FaceShapeLabel>() {
            Ok(label) if label.is_detected() => ShapeMatcher::Styles(recommended_styles(label)),
            _ => ShapeMatcher::Literal(shape.trim().to_lowercase()),
        }
    }

    fn matches(&self, frame_shape: &str) -> bool {
        match self {
            ShapeMatcher::Styles(styles) => styles.iter().any(|s| s.matches(frame_shape)),
            ShapeMatcher::Literal(shape) => frame_shape.trim().to_lowercase() == *shape,
        }
    }
}

/// Records satisfying every constraint in `filter`, in catalog order.
pub fn filter_catalog(catalog: &Catalog, filter: &FrameFilter) -> Vec<FrameRecord> {
    let shape = filter.shape_matcher();
    let result: Vec<FrameRecord> = catalog
        .records()
        .iter()
        .filter(|r| shape.as_ref().map_or(true, |m| m.matches(&r.frame_shape)))
        .filter(|r| filter.matches_fields(r))
        .cloned()
        .collect();
    log::debug!(
        "Catalog filter kept {} of {} records",
        result.len(),
        catalog.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            FrameRecord::new("Ray-Ban", "aviator", 154.0, Gender::Unisex, "adult"),
            FrameRecord::new("Oakley", "rectangular", 120.0, Gender::Male, "adult"),
            FrameRecord::new("Warby Parker", "round", 95.0, Gender::Female, "adult"),
            FrameRecord::new("Ray-Ban", "Wayframe", 140.0, Gender::Male, "teen"),
            FrameRecord::new("Tom Ford", "cat-eye", 310.0, Gender::Female, "adult"),
            FrameRecord::new("Oakley", "geometric", 80.0, Gender::Unisex, "kids"),
            FrameRecord::new("Persol", "browline", 230.0, Gender::Male, "senior"),
        ])
        .unwrap()
    }

    fn brands(records: &[FrameRecord]) -> Vec<(&str, &str)> {
        records
            .iter()
            .map(|r| (r.brand.as_str(), r.frame_shape.as_str()))
            .collect()
    }

    #[test]
    fn test_no_filters_returns_catalog_unchanged() {
        let result = filter_catalog(&catalog(), &FrameFilter::new());
        assert!(FrameFilter::new().is_empty());
        assert_eq!(result, catalog().records().to_vec());
    }

    #[rstest]
    #[case::blank_shape(FrameFilter::new().with_shape(""))]
    #[case::whitespace_shape(FrameFilter::new().with_shape("   "))]
    #[case::blank_brand(FrameFilter::new().with_brand(""))]
    #[case::blank_age_group(FrameFilter::new().with_age_group(" "))]
    fn test_blank_text_constraint_is_absent(#[case] filter: FrameFilter) {
        assert!(filter.is_empty());
        assert_eq!(filter_catalog(&catalog(), &filter), catalog().records().to_vec());
    }

    #[test]
    fn test_blank_constraint_leaves_others_active() {
        let filter = FrameFilter::new().with_brand("").with_age_group("teen");
        assert!(!filter.is_empty());
        assert_eq!(brands(&filter_catalog(&catalog(), &filter)), vec![("Ray-Ban", "Wayframe")]);
    }

    // ── shape ───────────────────────────────────────────────────────

    #[test]
    fn test_face_shape_expands_to_recommended_styles() {
        let result = filter_catalog(&catalog(), &FrameFilter::new().with_shape("round"));
        // round face → rectangular, square, wayframe, geometric, angular, d-frame
        assert_eq!(
            brands(&result),
            vec![
                ("Oakley", "rectangular"),
                ("Ray-Ban", "Wayframe"),
                ("Oakley", "geometric"),
            ]
        );
    }

    #[test]
    fn test_face_shape_label_is_case_insensitive() {
        let lower = filter_catalog(&catalog(), &FrameFilter::new().with_shape("heart"));
        let upper = filter_catalog(&catalog(), &FrameFilter::new().with_shape("HEART"));
        assert_eq!(lower, upper);
        assert_eq!(brands(&lower), vec![("Warby Parker", "round"), ("Tom Ford", "cat-eye")]);
    }

    #[rstest]
    #[case::exact("aviator", vec![("Ray-Ban", "aviator")])]
    #[case::case_insensitive("WAYFRAME", vec![("Ray-Ban", "Wayframe")])]
    #[case::hyphenated("Cat-Eye", vec![("Tom Ford", "cat-eye")])]
    #[case::unknown("hexagonal", vec![])]
    fn test_literal_frame_shape(#[case] shape: &str, #[case] expected: Vec<(&str, &str)>) {
        let result = filter_catalog(&catalog(), &FrameFilter::new().with_shape(shape));
        assert_eq!(brands(&result), expected);
    }

    #[test]
    fn test_sentinel_shape_is_literal() {
        let result = filter_catalog(&catalog(), &FrameFilter::new().with_shape("none_detected"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_explicit_styles_whitelist() {
        let filter = FrameFilter::new().with_styles(vec![FrameStyle::Browline, FrameStyle::Aviator]);
        let result = filter_catalog(&catalog(), &filter);
        assert_eq!(brands(&result), vec![("Ray-Ban", "aviator"), ("Persol", "browline")]);
    }

    #[test]
    fn test_empty_styles_whitelist_matches_nothing() {
        let filter = FrameFilter::new().with_styles(Vec::new());
        assert!(filter_catalog(&catalog(), &filter).is_empty());
    }

    // ── price ───────────────────────────────────────────────────────

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = FrameFilter::new().with_min_price(95.0).with_max_price(140.0);
        let result = filter_catalog(&catalog(), &filter);
        let prices: Vec<f64> = result.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![120.0, 95.0, 140.0]);
    }

    #[test]
    fn test_inverted_price_range_is_empty() {
        let filter = FrameFilter::new().with_min_price(200.0).with_max_price(100.0);
        assert!(filter_catalog(&catalog(), &filter).is_empty());
    }

    // ── brand / gender / age ────────────────────────────────────────

    #[test]
    fn test_brand_is_case_insensitive_exact() {
        let result = filter_catalog(&catalog(), &FrameFilter::new().with_brand("ray-ban"));
        assert_eq!(result.len(), 2);
        let partial = filter_catalog(&catalog(), &FrameFilter::new().with_brand("Ray"));
        assert!(partial.is_empty());
    }

    #[test]
    fn test_unisex_passes_any_gender_filter() {
        let female = filter_catalog(&catalog(), &FrameFilter::new().with_gender(Gender::Female));
        assert_eq!(
            brands(&female),
            vec![
                ("Ray-Ban", "aviator"),
                ("Warby Parker", "round"),
                ("Tom Ford", "cat-eye"),
                ("Oakley", "geometric"),
            ]
        );
        assert!(female.iter().all(|r| r.gender != Gender::Male));
    }

    #[test]
    fn test_unisex_filter_keeps_only_unisex() {
        let result = filter_catalog(&catalog(), &FrameFilter::new().with_gender(Gender::Unisex));
        assert!(result.iter().all(|r| r.gender == Gender::Unisex));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_male_record_fails_female_filter() {
        let record = FrameRecord::new("Oakley", "rectangular", 120.0, Gender::Male, "adult");
        assert!(!FrameFilter::new().with_gender(Gender::Female).matches(&record));
        assert!(FrameFilter::new().with_gender(Gender::Male).matches(&record));
    }

    #[test]
    fn test_age_group_exact_match() {
        let result = filter_catalog(&catalog(), &FrameFilter::new().with_age_group("teen"));
        assert_eq!(brands(&result), vec![("Ray-Ban", "Wayframe")]);
        assert!(filter_catalog(&catalog(), &FrameFilter::new().with_age_group("Teen")).is_empty());
    }

    // ── composition ─────────────────────────────────────────────────

    #[test]
    fn test_filters_compose_with_and_semantics() {
        let filter = FrameFilter::new()
            .with_shape("oval")
            .with_gender(Gender::Male)
            .with_max_price(160.0);
        let result = filter_catalog(&catalog(), &filter);
        // oval face → rectangular, square, wayframe, aviator, geometric, cat-eye, round
        assert_eq!(
            brands(&result),
            vec![
                ("Ray-Ban", "aviator"),
                ("Oakley", "rectangular"),
                ("Ray-Ban", "Wayframe"),
                ("Oakley", "geometric"),
            ]
        );
    }

    #[test]
    fn test_composition_order_does_not_matter() {
        let a = FrameFilter::new()
            .with_brand("oakley")
            .with_min_price(90.0)
            .with_gender(Gender::Male);
        let b = FrameFilter::new()
            .with_gender(Gender::Male)
            .with_min_price(90.0)
            .with_brand("oakley");
        assert_eq!(filter_catalog(&catalog(), &a), filter_catalog(&catalog(), &b));

        // Sequential application equals one combined pass.
        let by_brand = filter_catalog(&catalog(), &FrameFilter::new().with_brand("oakley"));
        let step1 = Catalog::new(by_brand).unwrap();
        let rest = FrameFilter::new().with_gender(Gender::Male).with_min_price(90.0);
        let step2 = filter_catalog(&step1, &rest);
        assert_eq!(step2, filter_catalog(&catalog(), &a));
    }

    #[test]
    fn test_matches_agrees_with_filter_catalog() {
        let filter = FrameFilter::new().with_shape("square").with_min_price(100.0);
        let expected: Vec<FrameRecord> = catalog()
            .records()
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        assert_eq!(filter_catalog(&catalog(), &filter), expected);
    }
}
