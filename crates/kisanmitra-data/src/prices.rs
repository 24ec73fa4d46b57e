//! Mandi price feed: pseudo-random rows for every state, district and crop
//! category, shaped like the public mandi rate APIs report them.

use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use kisanmitra_core::models::{CropCategory, MarketPrice};
use kisanmitra_core::Result;

use crate::gazetteer::STATES;
use crate::store::{DataProvider, RecordStore};

struct CropSpec {
    name: &'static str,
    varieties: &'static [&'static str],
}

const CEREALS: &[CropSpec] = &[
    CropSpec { name: "Wheat", varieties: &["Sharbati", "Lokwan", "Dara"] },
    CropSpec { name: "Rice", varieties: &["Basmati", "Sona Masuri", "Ponni"] },
    CropSpec { name: "Maize", varieties: &["Yellow", "White", "Sweet Corn"] },
    CropSpec { name: "Barley", varieties: &["Feed", "Malt"] },
    CropSpec { name: "Jowar", varieties: &["White", "Yellow"] },
    CropSpec { name: "Bajra", varieties: &["Hybrid", "Local"] },
];

const PULSES: &[CropSpec] = &[
    CropSpec { name: "Chickpea (Gram)", varieties: &["Desi", "Kabuli"] },
    CropSpec { name: "Pigeon Pea (Tur/Arhar)", varieties: &["Local", "Hybrid"] },
    CropSpec { name: "Black Gram (Urad)", varieties: &["Whole", "Split"] },
    CropSpec { name: "Green Gram (Moong)", varieties: &["Whole", "Split"] },
    CropSpec { name: "Lentil (Masoor)", varieties: &["Red", "Brown"] },
];

const OILSEEDS: &[CropSpec] = &[
    CropSpec { name: "Soybean", varieties: &["Yellow", "Black"] },
    CropSpec { name: "Mustard", varieties: &["Yellow", "Brown"] },
    CropSpec { name: "Groundnut", varieties: &["Bold", "Small"] },
    CropSpec { name: "Sunflower", varieties: &["Black", "Striped"] },
    CropSpec { name: "Sesame", varieties: &["White", "Black", "Brown"] },
];

const VEGETABLES: &[CropSpec] = &[
    CropSpec { name: "Potato", varieties: &["Table", "Seed"] },
    CropSpec { name: "Onion", varieties: &["Red", "White"] },
    CropSpec { name: "Tomato", varieties: &["Hybrid", "Local"] },
    CropSpec { name: "Cauliflower", varieties: &["Local"] },
    CropSpec { name: "Cabbage", varieties: &["Local"] },
];

const FRUITS: &[CropSpec] = &[
    CropSpec { name: "Apple", varieties: &["Delicious", "Kinnaur"] },
    CropSpec { name: "Banana", varieties: &["Robusta", "Cavendish"] },
    CropSpec { name: "Mango", varieties: &["Alphonso", "Dasheri", "Langra"] },
    CropSpec { name: "Orange", varieties: &["Nagpur", "Kinnow"] },
    CropSpec { name: "Grapes", varieties: &["Thompson", "Black"] },
];

const SPICES: &[CropSpec] = &[
    CropSpec { name: "Turmeric", varieties: &["Finger", "Bulb"] },
    CropSpec { name: "Chilli", varieties: &["Red", "Green"] },
    CropSpec { name: "Coriander", varieties: &["Local"] },
    CropSpec { name: "Cumin", varieties: &["Local"] },
    CropSpec { name: "Garlic", varieties: &["Local"] },
];

const CASH_CROPS: &[CropSpec] = &[
    CropSpec { name: "Cotton", varieties: &["Long Staple", "Medium Staple"] },
    CropSpec { name: "Sugarcane", varieties: &["Early", "General"] },
    CropSpec { name: "Jute", varieties: &["White", "Tossa"] },
    CropSpec { name: "Coffee", varieties: &["Arabica", "Robusta"] },
    CropSpec { name: "Tea", varieties: &["Leaf", "Dust"] },
];

fn crops_in(category: CropCategory) -> &'static [CropSpec] {
    match category {
        CropCategory::Cereals => CEREALS,
        CropCategory::Pulses => PULSES,
        CropCategory::Oilseeds => OILSEEDS,
        CropCategory::Vegetables => VEGETABLES,
        CropCategory::Fruits => FRUITS,
        CropCategory::Spices => SPICES,
        CropCategory::CashCrops => CASH_CROPS,
    }
}

/// Modal price band per category, rupees per unit
pub fn base_price_range(category: CropCategory) -> Range<u32> {
    match category {
        CropCategory::Cereals => 1500..2500,
        CropCategory::Pulses => 3000..5000,
        CropCategory::Oilseeds => 4000..7000,
        CropCategory::Vegetables => 1000..2000,
        CropCategory::Fruits => 2000..5000,
        CropCategory::Spices => 5000..10000,
        CropCategory::CashCrops => 3000..5000,
    }
}

/// Generate the full price table: every district gets 1-3 mandis, every
/// mandi quotes a couple of crops from each category.
pub fn generate_prices(rng: &mut impl Rng) -> Vec<MarketPrice> {
    let today = Utc::now().date_naive();
    let mut prices = Vec::new();
    let mut id = 1;

    for state in STATES {
        for district in &state.districts {
            let mandi_count = rng.gen_range(1..=3);
            for m in 0..mandi_count {
                let suffix = match m {
                    0 => "Main",
                    1 => "Rural",
                    _ => "Sub",
                };
                let mandi_name = format!("{district} {suffix} Mandi");

                for category in CropCategory::all() {
                    let pool = crops_in(category);
                    let crop_count = rng.gen_range(1..=2);
                    for crop in pool.choose_multiple(rng, crop_count) {
                        let variety_count = rng.gen_range(1..=2).min(crop.varieties.len());
                        for variety in crop.varieties.choose_multiple(rng, variety_count) {
                            let price = rng.gen_range(base_price_range(category));
                            let min_price = price - rng.gen_range(0..200);
                            let max_price = price + rng.gen_range(0..200);
                            let change = rng.gen_range(-100..100);
                            let last_updated = today - ChronoDuration::days(rng.gen_range(0..7));

                            prices.push(MarketPrice {
                                id,
                                crop: crop.name.to_string(),
                                variety: variety.to_string(),
                                category,
                                price,
                                min_price,
                                max_price,
                                unit: category.unit(),
                                market: mandi_name.clone(),
                                district: district.to_string(),
                                state: state.name.to_string(),
                                change,
                                last_updated,
                            });
                            id += 1;
                        }
                    }
                }
            }
        }
    }

    debug!(rows = prices.len(), "generated mandi price table");
    prices
}

/// Mock mandi rate feed with simulated network latency
pub struct MockPriceProvider {
    latency: Duration,
    seed: Option<u64>,
}

impl MockPriceProvider {
    pub fn new(latency_ms: u64, seed: Option<u64>) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
            seed,
        }
    }

    /// Store wired to this provider, ready to load
    pub fn into_store(self) -> RecordStore<MarketPrice> {
        RecordStore::new(Arc::new(self))
    }
}

#[async_trait]
impl DataProvider<MarketPrice> for MockPriceProvider {
    async fn fetch(&self) -> Result<Vec<MarketPrice>> {
        tokio::time::sleep(self.latency).await;
        let mut rng = crate::make_rng(self.seed);
        Ok(generate_prices(&mut rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer;
    use kisanmitra_core::models::PriceUnit;

    #[test]
    fn ids_are_unique_and_sequential() {
        let mut rng = crate::make_rng(Some(7));
        let prices = generate_prices(&mut rng);
        assert!(!prices.is_empty());
        for (i, price) in prices.iter().enumerate() {
            assert_eq!(price.id, i as u32 + 1);
        }
    }

    #[test]
    fn rows_respect_category_bands_and_bounds() {
        let mut rng = crate::make_rng(Some(7));
        for price in generate_prices(&mut rng) {
            let band = base_price_range(price.category);
            assert!(band.contains(&price.price), "{:?}", price);
            assert!(price.min_price <= price.price);
            assert!(price.max_price >= price.price);
            assert!((-100..100).contains(&price.change));
        }
    }

    #[test]
    fn every_row_has_a_valid_location() {
        let mut rng = crate::make_rng(Some(11));
        for price in generate_prices(&mut rng) {
            gazetteer::validate_location(&price.state, &price.district)
                .unwrap_or_else(|_| panic!("bad location: {}/{}", price.state, price.district));
        }
    }

    #[test]
    fn produce_is_priced_per_kg() {
        let mut rng = crate::make_rng(Some(3));
        for price in generate_prices(&mut rng) {
            match price.category {
                kisanmitra_core::models::CropCategory::Vegetables
                | kisanmitra_core::models::CropCategory::Fruits => {
                    assert_eq!(price.unit, PriceUnit::Kg)
                }
                _ => assert_eq!(price.unit, PriceUnit::Quintal),
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = crate::make_rng(Some(42));
        let mut b = crate::make_rng(Some(42));
        assert_eq!(generate_prices(&mut a), generate_prices(&mut b));
    }
}
