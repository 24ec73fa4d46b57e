use std::cmp::Ordering;

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use super::criteria::{Criteria, SortDirection};
use super::fields::{FieldCatalog, FieldDef, FieldValue, Queryable};
use crate::{Error, Result};

/// Run `criteria` against `records` and return the matching subset, ordered.
///
/// The input is never mutated and the result is a fresh Vec, so calling this
/// twice with the same arguments yields element-wise equal output. Sorting is
/// stable: records with equal sort keys keep their input order. A criteria
/// that names a field missing from the record's catalog fails with
/// [`Error::UnknownField`] before any record is inspected.
pub fn query<R>(records: &[R], criteria: &Criteria) -> Result<Vec<R>>
where
    R: Queryable + Clone,
{
    query_with_catalog(&R::field_catalog(), records, criteria)
}

/// Same as [`query`] but with an explicit catalog, for callers that build
/// their own field set instead of using the record's default.
pub fn query_with_catalog<R: Clone>(
    catalog: &FieldCatalog<R>,
    records: &[R],
    criteria: &Criteria,
) -> Result<Vec<R>> {
    // Resolve every referenced field up front. Unknown names are a hard
    // error, never a silent no-op.
    let filters: Vec<(&FieldDef<R>, &str)> = criteria
        .filters()
        .iter()
        .map(|f| {
            catalog
                .field(&f.field)
                .map(|def| (def, f.value.as_str()))
                .ok_or_else(|| Error::UnknownField {
                    field: f.field.clone(),
                })
        })
        .collect::<Result<_>>()?;

    let sort = criteria
        .sort()
        .map(|spec| {
            catalog
                .field(&spec.field)
                .map(|def| (def, spec.direction))
                .ok_or_else(|| Error::UnknownField {
                    field: spec.field.clone(),
                })
        })
        .transpose()?;

    let term = criteria.term().trim().to_lowercase();

    let mut result: Vec<R> = records
        .iter()
        .filter(|r| matches_term(catalog, r, &term) && matches_filters(*r, &filters))
        .cloned()
        .collect();

    if let Some((def, direction)) = sort {
        // sort_by is stable, and reversing the comparator leaves equal keys
        // untouched, so ties keep input order in both directions.
        result.sort_by(|a, b| {
            let ordering = compare_values(&def.value(a), &def.value(b));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    debug!(
        total = records.len(),
        matched = result.len(),
        "query evaluated"
    );

    Ok(result)
}

/// Case-insensitive substring search over the catalog's searchable fields.
/// An empty term matches everything.
fn matches_term<R>(catalog: &FieldCatalog<R>, record: &R, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    catalog.searchable_fields().any(|def| match def.value(record) {
        FieldValue::Text(text) => text.to_lowercase().contains(term),
        FieldValue::Tags(tags) => tags.iter().any(|t| t.to_lowercase().contains(term)),
        FieldValue::Number(_) => false,
    })
}

/// Every active filter must be satisfied (logical AND)
fn matches_filters<R>(record: &R, filters: &[(&FieldDef<R>, &str)]) -> bool {
    filters.iter().all(|(def, wanted)| match def.value(record) {
        FieldValue::Text(text) => text.eq_ignore_ascii_case(wanted),
        FieldValue::Tags(tags) => tags.iter().any(|t| t.eq_ignore_ascii_case(wanted)),
        FieldValue::Number(n) => wanted.parse::<f64>().map(|w| w == n).unwrap_or(false),
    })
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => sort_key(a).cmp(&sort_key(b)),
        (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
        (FieldValue::Tags(a), FieldValue::Tags(b)) => {
            sort_key(&a.join(" ")).cmp(&sort_key(&b.join(" ")))
        }
        // A field extractor always yields one kind, so mixed comparisons
        // cannot happen through the public API.
        _ => Ordering::Equal,
    }
}

/// Normalize text for ordering: NFD decomposition, lowercase, collapsed
/// whitespace. Keeps "Jalandhar" and "jalandhar " adjacent the way a
/// locale-aware comparison would.
fn sort_key(s: &str) -> String {
    let normalized: String = s.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fields::FieldCatalog;
    use crate::query::Criteria;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        crop: String,
        state: String,
        price: u32,
    }

    impl Row {
        fn new(crop: &str, state: &str, price: u32) -> Self {
            Self {
                crop: crop.into(),
                state: state.into(),
                price,
            }
        }
    }

    impl Queryable for Row {
        fn field_catalog() -> FieldCatalog<Self> {
            FieldCatalog::builder()
                .searchable_text("crop", |r: &Row| FieldValue::Text(r.crop.clone()))
                .text("state", |r: &Row| FieldValue::Text(r.state.clone()))
                .number("price", |r: &Row| FieldValue::Number(r.price as f64))
                .build()
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            Row::new("Wheat", "Punjab", 100),
            Row::new("Rice", "Haryana", 50),
            Row::new("Mustard", "Punjab", 75),
        ]
    }

    #[test]
    fn empty_criteria_returns_all_in_input_order() {
        let rows = sample();
        let result = query(&rows, &Criteria::new()).unwrap();
        assert_eq!(result, rows);
    }

    #[test]
    fn search_matches_case_insensitive_substring() {
        let rows = vec![Row::new("Wheat", "Punjab", 1), Row::new("Rice", "Punjab", 2)];
        let result = query(&rows, &Criteria::new().with_term("wh")).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].crop, "Wheat");
    }

    #[test]
    fn search_does_not_scan_unsearchable_fields() {
        // "state" is not flagged searchable, so a term matching only states
        // finds nothing.
        let rows = sample();
        let result = query(&rows, &Criteria::new().with_term("punjab")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn filter_excludes_non_matching_records() {
        let rows = sample();
        let result = query(&rows, &Criteria::new().with_filter("state", "Punjab")).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.state == "Punjab"));
    }

    #[test]
    fn all_sentinel_means_no_constraint() {
        let rows = sample();
        let result = query(&rows, &Criteria::new().with_filter("state", "all")).unwrap();
        assert_eq!(result.len(), rows.len());
    }

    #[test]
    fn numeric_sort_descending() {
        let rows = sample();
        let result = query(
            &rows,
            &Criteria::new().sorted_by("price", SortDirection::Descending),
        )
        .unwrap();
        let prices: Vec<u32> = result.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![100, 75, 50]);
    }

    #[test]
    fn text_sort_ascending_ignores_case() {
        let rows = vec![
            Row::new("mustard", "Punjab", 1),
            Row::new("Barley", "Punjab", 2),
            Row::new("wheat", "Punjab", 3),
        ];
        let result = query(
            &rows,
            &Criteria::new().sorted_by("crop", SortDirection::Ascending),
        )
        .unwrap();
        let crops: Vec<&str> = result.iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(crops, vec!["Barley", "mustard", "wheat"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let rows = vec![
            Row::new("Wheat", "Punjab", 10),
            Row::new("Rice", "Punjab", 10),
            Row::new("Maize", "Haryana", 10),
        ];
        let result = query(
            &rows,
            &Criteria::new().sorted_by("price", SortDirection::Ascending),
        )
        .unwrap();
        let crops: Vec<&str> = result.iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(crops, vec!["Wheat", "Rice", "Maize"]);

        let reversed = query(
            &rows,
            &Criteria::new().sorted_by("price", SortDirection::Descending),
        )
        .unwrap();
        let crops: Vec<&str> = reversed.iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(crops, vec!["Wheat", "Rice", "Maize"]);
    }

    #[test]
    fn combined_term_filter_and_sort() {
        let rows = vec![
            Row::new("Wheat Dara", "Punjab", 90),
            Row::new("Wheat Lokwan", "Punjab", 120),
            Row::new("Wheat Sharbati", "Haryana", 110),
            Row::new("Rice Basmati", "Punjab", 300),
        ];
        let criteria = Criteria::new()
            .with_term("wheat")
            .with_filter("state", "Punjab")
            .sorted_by("price", SortDirection::Descending);
        let result = query(&rows, &criteria).unwrap();
        let crops: Vec<&str> = result.iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(crops, vec!["Wheat Lokwan", "Wheat Dara"]);
    }

    #[test]
    fn query_is_idempotent() {
        let rows = sample();
        let criteria = Criteria::new()
            .with_term("a")
            .sorted_by("crop", SortDirection::Ascending);
        let first = query(&rows, &criteria).unwrap();
        let second = query(&rows, &criteria).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn completeness_no_drops_no_duplicates() {
        let rows = sample();
        let result = query(
            &rows,
            &Criteria::new().sorted_by("crop", SortDirection::Ascending),
        )
        .unwrap();
        assert_eq!(result.len(), rows.len());
        for row in &rows {
            assert_eq!(result.iter().filter(|r| *r == row).count(), 1);
        }
    }

    #[test]
    fn unknown_filter_field_is_an_error() {
        let rows = sample();
        let err = query(&rows, &Criteria::new().with_filter("mandi", "x")).unwrap_err();
        assert!(matches!(err, Error::UnknownField { field } if field == "mandi"));
    }

    #[test]
    fn unknown_sort_field_is_an_error() {
        let rows = sample();
        let err = query(
            &rows,
            &Criteria::new().sorted_by("stars", SortDirection::Ascending),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownField { field } if field == "stars"));
    }

    #[test]
    fn input_collection_is_untouched() {
        let rows = sample();
        let before = rows.clone();
        let _ = query(
            &rows,
            &Criteria::new().sorted_by("price", SortDirection::Descending),
        )
        .unwrap();
        assert_eq!(rows, before);
    }
}
