//! End-to-end flow: load a mock collection through the record store, run
//! criteria through the query engine, and export the result.

use kisanmitra_core::models::MarketPrice;
use kisanmitra_core::{query, Criteria, Exporter, Queryable, SortDirection};
use kisanmitra_data::prices::MockPriceProvider;
use kisanmitra_data::{gazetteer, LoadState};

#[tokio::test]
async fn load_then_query_then_export() {
    let store = MockPriceProvider::new(5, Some(42)).into_store();
    store.load().await.unwrap();
    assert_eq!(store.state(), LoadState::Loaded);

    let prices = store.records();
    assert!(prices.len() > 100, "mock table should be in the hundreds");

    let criteria = Criteria::new()
        .with_filter("state", "Punjab")
        .sorted_by("price", SortDirection::Descending);
    let result = query(&prices, &criteria).unwrap();

    assert!(!result.is_empty());
    for row in &result {
        assert_eq!(row.state, "Punjab");
        gazetteer::validate_location(&row.state, &row.district).unwrap();
    }
    for pair in result.windows(2) {
        assert!(pair[0].price >= pair[1].price);
    }

    // The engine never truncates; compact views slice on top.
    let limit = 5.min(result.len());
    let compact: Vec<&MarketPrice> = result.iter().take(limit).collect();
    assert_eq!(compact.len(), limit);

    let csv = Exporter::to_csv(&result);
    assert!(csv.lines().count() == result.len() + 1);

    let json = Exporter::to_json(&result).unwrap();
    let parsed: Vec<MarketPrice> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), result.len());
}

#[tokio::test]
async fn search_term_narrows_across_views() {
    let store = MockPriceProvider::new(5, Some(7)).into_store();
    store.load().await.unwrap();
    let prices = store.records();

    let result = query(&prices, &Criteria::new().with_term("wheat")).unwrap();
    assert!(!result.is_empty());
    for row in &result {
        let haystack = format!(
            "{} {} {} {} {}",
            row.crop, row.variety, row.market, row.district, row.state
        )
        .to_lowercase();
        assert!(haystack.contains("wheat"), "{row:?}");
    }
}

#[test]
fn catalog_rejects_fields_from_other_record_types() {
    // "distance" belongs to Market, not MarketPrice
    let catalog = MarketPrice::field_catalog();
    assert!(!catalog.contains("distance"));
    assert!(catalog.contains("price"));
}
