//! Nearby market directory. A fixed roster, as the location service would
//! return for a farmer around Ludhiana.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use kisanmitra_core::models::{Market, MarketKind};
use kisanmitra_core::Result;

use crate::store::{DataProvider, RecordStore};

fn days(names: &[&str]) -> Vec<String> {
    names.iter().map(|d| d.to_string()).collect()
}

const WEEKDAYS_AND_SATURDAY: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The full nearby-market roster, distances measured from the default
/// location
pub fn market_directory() -> Vec<Market> {
    let mut id = 0;
    let mut market = |name: &str,
                      distance_km: f64,
                      address: &str,
                      phone: &str,
                      trading_hours: &str,
                      trading_days: Vec<String>,
                      main_crops: &[&str],
                      facilities: &[&str],
                      average_arrival: &str,
                      state: &str,
                      district: &str,
                      kind: MarketKind| {
        id += 1;
        Market {
            id,
            name: name.to_string(),
            distance_km,
            address: address.to_string(),
            phone: phone.to_string(),
            trading_hours: trading_hours.to_string(),
            trading_days,
            main_crops: main_crops.iter().map(|c| c.to_string()).collect(),
            facilities: facilities.iter().map(|f| f.to_string()).collect(),
            average_arrival: average_arrival.to_string(),
            state: state.to_string(),
            district: district.to_string(),
            kind,
        }
    };

    vec![
        market(
            "Khanna Grain Market",
            5.2,
            "G.T. Road, Khanna, Punjab",
            "+91 1234567890",
            "8:00 AM - 6:00 PM",
            days(WEEKDAYS_AND_SATURDAY),
            &["Wheat", "Rice", "Maize"],
            &["Electronic Weighing", "Storage", "Banking", "Transport"],
            "500-700 quintals/day",
            "Punjab",
            "Ludhiana",
            MarketKind::Apmc,
        ),
        market(
            "Ludhiana Mandi",
            12.8,
            "Gill Road, Ludhiana, Punjab",
            "+91 9876543210",
            "7:00 AM - 7:00 PM",
            days(WEEKDAYS_AND_SATURDAY),
            &["Wheat", "Rice", "Vegetables", "Fruits"],
            &[
                "Electronic Weighing",
                "Storage",
                "Banking",
                "Transport",
                "Cold Storage",
            ],
            "800-1000 quintals/day",
            "Punjab",
            "Ludhiana",
            MarketKind::Apmc,
        ),
        market(
            "Jalandhar Grain Market",
            28.5,
            "Nakodar Road, Jalandhar, Punjab",
            "+91 8765432109",
            "8:00 AM - 5:00 PM",
            days(WEEKDAYS_AND_SATURDAY),
            &["Wheat", "Maize", "Potatoes"],
            &["Electronic Weighing", "Storage", "Transport"],
            "300-500 quintals/day",
            "Punjab",
            "Jalandhar",
            MarketKind::Apmc,
        ),
        market(
            "Patiala Vegetable Market",
            35.2,
            "Rajpura Road, Patiala, Punjab",
            "+91 7654321098",
            "6:00 AM - 8:00 PM",
            days(&[
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]),
            &["Vegetables", "Fruits", "Spices"],
            &["Electronic Weighing", "Cold Storage", "Transport"],
            "200-300 quintals/day",
            "Punjab",
            "Patiala",
            MarketKind::Apmc,
        ),
        market(
            "Karnal Grain Market",
            42.7,
            "GT Road, Karnal, Haryana",
            "+91 9988776655",
            "7:30 AM - 6:30 PM",
            days(WEEKDAYS_AND_SATURDAY),
            &["Wheat", "Rice", "Maize", "Barley"],
            &["Electronic Weighing", "Storage", "Banking", "Transport"],
            "600-800 quintals/day",
            "Haryana",
            "Karnal",
            MarketKind::Apmc,
        ),
        market(
            "Ambala Wholesale Market",
            55.3,
            "Ambala Cantt, Haryana",
            "+91 9876123450",
            "7:00 AM - 6:00 PM",
            days(WEEKDAYS_AND_SATURDAY),
            &["Wheat", "Rice", "Pulses", "Oilseeds"],
            &["Electronic Weighing", "Storage", "Banking"],
            "400-600 quintals/day",
            "Haryana",
            "Ambala",
            MarketKind::Apmc,
        ),
        market(
            "Hisar Agricultural Market",
            78.9,
            "Delhi Road, Hisar, Haryana",
            "+91 8877665544",
            "8:00 AM - 5:30 PM",
            days(WEEKDAYS_AND_SATURDAY),
            &["Cotton", "Wheat", "Mustard", "Gram"],
            &["Electronic Weighing", "Storage", "Banking", "Transport"],
            "500-700 quintals/day",
            "Haryana",
            "Hisar",
            MarketKind::Apmc,
        ),
        market(
            "Bathinda Cotton Market",
            62.1,
            "Goniana Road, Bathinda, Punjab",
            "+91 9911223344",
            "8:30 AM - 6:00 PM",
            days(WEEKDAYS_AND_SATURDAY),
            &["Cotton", "Wheat", "Mustard"],
            &["Electronic Weighing", "Storage", "Banking", "Transport"],
            "400-600 quintals/day",
            "Punjab",
            "Bathinda",
            MarketKind::Apmc,
        ),
        market(
            "Amritsar Grain Market",
            85.4,
            "GT Road, Amritsar, Punjab",
            "+91 8899776655",
            "7:00 AM - 6:00 PM",
            days(WEEKDAYS_AND_SATURDAY),
            &["Wheat", "Rice", "Maize"],
            &["Electronic Weighing", "Storage", "Banking", "Transport"],
            "700-900 quintals/day",
            "Punjab",
            "Amritsar",
            MarketKind::Apmc,
        ),
        market(
            "Rohtak Mandi",
            92.7,
            "Delhi Road, Rohtak, Haryana",
            "+91 7788990011",
            "7:30 AM - 5:30 PM",
            days(WEEKDAYS_AND_SATURDAY),
            &["Wheat", "Rice", "Bajra", "Jowar"],
            &["Electronic Weighing", "Storage", "Banking"],
            "300-500 quintals/day",
            "Haryana",
            "Rohtak",
            MarketKind::Apmc,
        ),
        market(
            "Farmer's Direct Market",
            8.3,
            "Model Town, Ludhiana, Punjab",
            "+91 9988776655",
            "9:00 AM - 5:00 PM",
            days(&["Wednesday", "Saturday", "Sunday"]),
            &["Vegetables", "Fruits", "Dairy"],
            &["Electronic Weighing", "Parking"],
            "50-100 quintals/day",
            "Punjab",
            "Ludhiana",
            MarketKind::Cooperative,
        ),
        market(
            "Agri Business Center",
            15.6,
            "Industrial Area, Ludhiana, Punjab",
            "+91 9876543210",
            "10:00 AM - 6:00 PM",
            days(&["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]),
            &["Wheat", "Rice", "Maize", "Pulses"],
            &[
                "Electronic Weighing",
                "Storage",
                "Processing",
                "Export Facilitation",
            ],
            "200-300 quintals/day",
            "Punjab",
            "Ludhiana",
            MarketKind::Private,
        ),
    ]
}

/// Mock location-service feed for nearby markets
pub struct MockMarketProvider {
    latency: Duration,
}

impl MockMarketProvider {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }

    pub fn into_store(self) -> RecordStore<Market> {
        RecordStore::new(Arc::new(self))
    }
}

#[async_trait]
impl DataProvider<Market> for MockMarketProvider {
    async fn fetch(&self) -> Result<Vec<Market>> {
        tokio::time::sleep(self.latency).await;
        Ok(market_directory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer;

    #[test]
    fn directory_has_unique_ids() {
        let markets = market_directory();
        assert_eq!(markets.len(), 12);
        let mut ids: Vec<u32> = markets.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), markets.len());
    }

    #[test]
    fn every_market_location_is_known() {
        for market in market_directory() {
            gazetteer::validate_location(&market.state, &market.district).unwrap();
        }
    }

    #[test]
    fn the_closest_market_is_a_cooperative_or_apmc() {
        let markets = market_directory();
        let closest = markets
            .iter()
            .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
            .unwrap();
        assert_eq!(closest.name, "Khanna Grain Market");
    }
}
