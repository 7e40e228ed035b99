use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::catalog::Catalog;
use super::frame_record::Gender;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Distinct filter values over the whole catalog, for building filter UIs.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FacetSummary {
    pub brands: Vec<String>,
    pub frame_shapes: Vec<String>,
    pub genders: Vec<Gender>,
    pub age_groups: Vec<String>,
    /// `None` when the catalog is empty.
    pub price_range: Option<PriceRange>,
}

/// Summarizes the unfiltered catalog. String facets are sorted ascending,
/// genders follow enum order.
///
/// Brands and frame shapes are filtered case-insensitively, so values that
/// differ only in case collapse to the first spelling seen.
pub fn facets(catalog: &Catalog) -> FacetSummary {
    let mut brands = BTreeMap::new();
    let mut frame_shapes = BTreeMap::new();
    let mut genders = BTreeSet::new();
    let mut age_groups = BTreeSet::new();
    let mut price_range: Option<PriceRange> = None;

    for record in catalog.records() {
        insert_folded(&mut brands, &record.brand);
        insert_folded(&mut frame_shapes, &record.frame_shape);
        genders.insert(record.gender);
        age_groups.insert(record.age_group.clone());
        price_range = Some(match price_range {
            None => PriceRange {
                min: record.price,
                max: record.price,
            },
            Some(range) => PriceRange {
                min: range.min.min(record.price),
                max: range.max.max(record.price),
            },
        });
    }

    FacetSummary {
        brands: brands.into_values().collect(),
        frame_shapes: frame_shapes.into_values().collect(),
        genders: genders.into_iter().collect(),
        age_groups: age_groups.into_iter().collect(),
        price_range,
    }
}

fn insert_folded(values: &mut BTreeMap<String, String>, value: &str) {
    values
        .entry(value.trim().to_lowercase())
        .or_insert_with(|| value.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::frame_record::FrameRecord;
    use approx::assert_relative_eq;

    #[test]
    fn test_facets_distinct_sorted_values() {
        let catalog = Catalog::new(vec![
            FrameRecord::new("Oakley", "round", 120.0, Gender::Unisex, "adult"),
            FrameRecord::new("Persol", "aviator", 230.0, Gender::Male, "senior"),
            FrameRecord::new("Oakley", "aviator", 80.0, Gender::Female, "adult"),
        ])
        .unwrap();

        let summary = facets(&catalog);
        assert_eq!(summary.brands, vec!["Oakley", "Persol"]);
        assert_eq!(summary.frame_shapes, vec!["aviator", "round"]);
        assert_eq!(summary.genders, vec![Gender::Male, Gender::Female, Gender::Unisex]);
        assert_eq!(summary.age_groups, vec!["adult", "senior"]);

        let range = summary.price_range.unwrap();
        assert_relative_eq!(range.min, 80.0);
        assert_relative_eq!(range.max, 230.0);
    }

    #[test]
    fn test_facets_fold_case_like_the_filters() {
        let catalog = Catalog::new(vec![
            FrameRecord::new("Ray-Ban", "Wayframe", 140.0, Gender::Male, "adult"),
            FrameRecord::new("ray-ban", "wayframe", 150.0, Gender::Male, "adult"),
            FrameRecord::new("Oakley", "aviator", 90.0, Gender::Male, "adult"),
        ])
        .unwrap();

        let summary = facets(&catalog);
        assert_eq!(summary.brands, vec!["Oakley", "Ray-Ban"]);
        assert_eq!(summary.frame_shapes, vec!["aviator", "Wayframe"]);
    }

    #[test]
    fn test_facets_single_record_range() {
        let catalog =
            Catalog::new(vec![FrameRecord::new("A", "oval", 42.5, Gender::Male, "kids")]).unwrap();
        let range = facets(&catalog).price_range.unwrap();
        assert_relative_eq!(range.min, 42.5);
        assert_relative_eq!(range.max, 42.5);
    }

    #[test]
    fn test_facets_empty_catalog() {
        let summary = facets(&Catalog::default());
        assert_eq!(summary, FacetSummary::default());
        assert!(summary.price_range.is_none());
    }
}
