//! Price history series for the trends view. Each crop gets a base price,
//! a volatility band and a drift; the series is synthesized around those.

use rand::Rng;
use tracing::debug;

use kisanmitra_core::models::{PricePoint, TrendPeriod};

struct TrendSpec {
    base: f64,
    volatility: f64,
    /// Drift per step: negative drifts down, zero is flat
    trend: f64,
    /// MSP-notified crops get a support price line at 90% of base
    msp: bool,
}

fn spec_for(crop: &str) -> TrendSpec {
    let (base, volatility, trend, msp) = match crop.trim().to_lowercase().as_str() {
        "wheat" => (2200.0, 50.0, 0.5, true),
        "rice" => (3700.0, 80.0, 1.0, true),
        "maize" => (1800.0, 60.0, -0.5, false),
        "barley" => (1600.0, 40.0, 0.0, false),
        "gram" => (4500.0, 100.0, 1.0, false),
        "tur" => (6000.0, 120.0, 0.8, false),
        "moong" => (7000.0, 150.0, -0.3, false),
        "soybean" => (3800.0, 90.0, 0.7, false),
        "mustard" => (4200.0, 70.0, 0.2, false),
        "groundnut" => (5500.0, 110.0, -0.1, false),
        "potato" => (1200.0, 200.0, -0.8, false),
        "onion" => (1500.0, 300.0, -0.6, false),
        "tomato" => (2000.0, 400.0, 0.4, false),
        _ => (2000.0, 100.0, 0.0, false),
    };
    TrendSpec {
        base,
        volatility,
        trend,
        msp,
    }
}

/// Crops the trends view offers
pub fn known_crops() -> Vec<&'static str> {
    vec![
        "wheat", "rice", "maize", "barley", "gram", "tur", "moong", "soybean", "mustard",
        "groundnut", "potato", "onion", "tomato",
    ]
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Synthesize a price history for one crop, seeding its own RNG
pub fn sample_history(crop: &str, period: TrendPeriod, seed: Option<u64>) -> Vec<PricePoint> {
    let mut rng = crate::make_rng(seed);
    price_history(crop, period, &mut rng)
}

/// Synthesize a price history for one crop
pub fn price_history(crop: &str, period: TrendPeriod, rng: &mut impl Rng) -> Vec<PricePoint> {
    let spec = spec_for(crop);
    let msp = spec.msp.then(|| (spec.base * 0.9).round() as u32);

    let series: Vec<PricePoint> = match period {
        TrendPeriod::Weekly => WEEKDAYS
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let drift = spec.trend * i as f64 * 10.0;
                let noise = (rng.gen::<f64>() * 2.0 - 1.0) * spec.volatility;
                PricePoint {
                    label: day.to_string(),
                    price: (spec.base + drift + noise).round() as u32,
                    average: (spec.base - 20.0 + rng.gen::<f64>() * 40.0).round() as u32,
                    msp,
                }
            })
            .collect(),
        TrendPeriod::Monthly => (0..30)
            .map(|i| {
                let drift = spec.trend * i as f64 * 5.0;
                let seasonal = (i as f64 / 5.0).sin() * (spec.volatility / 2.0);
                let noise = (rng.gen::<f64>() * 2.0 - 1.0) * spec.volatility;
                PricePoint {
                    label: (i + 1).to_string(),
                    price: (spec.base + drift + seasonal + noise).round() as u32,
                    average: (spec.base + seasonal - 50.0 + rng.gen::<f64>() * 100.0).round()
                        as u32,
                    msp,
                }
            })
            .collect(),
        TrendPeriod::Yearly => MONTHS
            .iter()
            .enumerate()
            .map(|(i, month)| {
                let drift = spec.trend * i as f64 * 20.0;
                let seasonal = (i as f64 / 2.0).sin() * spec.volatility;
                let noise = (rng.gen::<f64>() * 2.0 - 1.0) * spec.volatility;
                PricePoint {
                    label: month.to_string(),
                    price: (spec.base + drift + seasonal + noise).round() as u32,
                    average: (spec.base + seasonal - 50.0 + rng.gen::<f64>() * 100.0).round()
                        as u32,
                    msp,
                }
            })
            .collect(),
    };

    debug!(crop, points = series.len(), "price history generated");
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_length_follows_the_period() {
        let mut rng = crate::make_rng(Some(5));
        assert_eq!(price_history("wheat", TrendPeriod::Weekly, &mut rng).len(), 7);
        assert_eq!(
            price_history("wheat", TrendPeriod::Monthly, &mut rng).len(),
            30
        );
        assert_eq!(
            price_history("wheat", TrendPeriod::Yearly, &mut rng).len(),
            12
        );
    }

    #[test]
    fn msp_line_only_for_notified_crops() {
        let mut rng = crate::make_rng(Some(5));
        let wheat = price_history("wheat", TrendPeriod::Weekly, &mut rng);
        assert!(wheat.iter().all(|p| p.msp == Some(1980)));

        let potato = price_history("potato", TrendPeriod::Weekly, &mut rng);
        assert!(potato.iter().all(|p| p.msp.is_none()));
    }

    #[test]
    fn unknown_crop_falls_back_to_generic_band() {
        let mut rng = crate::make_rng(Some(5));
        let series = price_history("dragonfruit", TrendPeriod::Weekly, &mut rng);
        // base 2000, volatility 100, no drift: everything stays near base
        for point in series {
            assert!((1900..=2100).contains(&point.price));
        }
    }
}
