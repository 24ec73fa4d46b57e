//! Dashboard aggregation: the home view shows a little of everything, so
//! all feeds are fetched concurrently instead of one after another.

use futures::join;
use tracing::info;

use kisanmitra_core::models::{CropAdvice, CurrentWeather, MarketPrice, Scheme};
use kisanmitra_core::Result;

use crate::crops::MockCropProvider;
use crate::prices::MockPriceProvider;
use crate::schemes::MockSchemeProvider;
use crate::store::DataProvider;
use crate::weather::current_weather;

/// Everything the dashboard needs, loaded in one round trip
pub struct DashboardData {
    pub weather: CurrentWeather,
    pub prices: Vec<MarketPrice>,
    pub schemes: Vec<Scheme>,
    pub crops: Vec<CropAdvice>,
}

/// Fetch all dashboard feeds concurrently. Wall time is one latency, not
/// four.
pub async fn load_dashboard(latency_ms: u64, seed: Option<u64>) -> Result<DashboardData> {
    let price_provider = MockPriceProvider::new(latency_ms, seed);
    let scheme_provider = MockSchemeProvider::new(latency_ms);
    let crop_provider = MockCropProvider::new(latency_ms);

    let (weather, prices, schemes, crops) = join!(
        current_weather(latency_ms),
        price_provider.fetch(),
        scheme_provider.fetch(),
        crop_provider.fetch(),
    );

    let data = DashboardData {
        weather,
        prices: prices?,
        schemes: schemes?,
        crops: crops?,
    };

    info!(
        prices = data.prices.len(),
        schemes = data.schemes.len(),
        crops = data.crops.len(),
        "dashboard loaded"
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dashboard_loads_every_feed() {
        let data = load_dashboard(1, Some(42)).await.unwrap();
        assert!(!data.prices.is_empty());
        assert_eq!(data.schemes.len(), 5);
        assert_eq!(data.crops.len(), 5);
        assert_eq!(data.weather.temperature_c, 28);
    }
}
