//! Mock weather service: current conditions, 7-day and 24-hour forecasts,
//! and farming advisories.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use kisanmitra_core::models::{
    AlertSeverity, CurrentWeather, ForecastDay, ForecastHour, SkyCondition, WeatherAlert,
};
use kisanmitra_core::Result;

use crate::store::{DataProvider, RecordStore};

fn random_condition(rng: &mut impl Rng) -> SkyCondition {
    *SkyCondition::all()
        .choose(rng)
        .unwrap_or(&SkyCondition::Sunny)
}

/// Current conditions for the dashboard widget
pub async fn current_weather(latency_ms: u64) -> CurrentWeather {
    tokio::time::sleep(Duration::from_millis(latency_ms)).await;
    CurrentWeather {
        temperature_c: 28,
        condition: SkyCondition::PartlyCloudy,
        humidity_pct: 65,
        wind_kmh: 12,
    }
}

pub fn generate_daily_forecast(rng: &mut impl Rng) -> Vec<ForecastDay> {
    let today = Utc::now().date_naive();

    (0..7)
        .map(|i| {
            let date = today + ChronoDuration::days(i);
            let day = if i == 0 {
                "Today".to_string()
            } else {
                date.format("%A").to_string()
            };
            ForecastDay {
                day,
                date,
                high_c: 25 + rng.gen_range(0..10),
                low_c: 15 + rng.gen_range(0..5),
                condition: random_condition(rng),
                precipitation_pct: rng.gen_range(0..100),
            }
        })
        .collect()
}

pub fn generate_hourly_forecast(rng: &mut impl Rng) -> Vec<ForecastHour> {
    (0..24)
        .map(|i| {
            let hour = if i % 12 == 0 { 12 } else { i % 12 };
            let ampm = if i < 12 { "AM" } else { "PM" };
            ForecastHour {
                time: format!("{hour} {ampm}"),
                temperature_c: 20 + rng.gen_range(0..15),
                condition: random_condition(rng),
                precipitation_pct: rng.gen_range(0..100),
            }
        })
        .collect()
}

pub fn weather_alerts() -> Vec<WeatherAlert> {
    let today = Utc::now().date_naive();

    vec![
        WeatherAlert {
            id: 1,
            severity: AlertSeverity::Warning,
            title: "Heavy Rain Warning".to_string(),
            description: "Heavy rainfall expected in your area over the next 48 hours. \
                          Potential for localized flooding in low-lying areas."
                .to_string(),
            date: today,
        },
        WeatherAlert {
            id: 2,
            severity: AlertSeverity::Info,
            title: "Ideal Planting Conditions".to_string(),
            description: "Soil moisture and temperature over the coming week are favourable \
                          for sowing rabi crops."
                .to_string(),
            date: today + ChronoDuration::days(1),
        },
        WeatherAlert {
            id: 3,
            severity: AlertSeverity::Alert,
            title: "Heat Wave Watch".to_string(),
            description: "Daytime temperatures may cross 40°C later this week. Irrigate \
                          standing crops in the evening and avoid midday field work."
                .to_string(),
            date: today + ChronoDuration::days(3),
        },
    ]
}

/// 7-day forecast feed
pub struct DailyForecastProvider {
    latency: Duration,
    seed: Option<u64>,
}

impl DailyForecastProvider {
    pub fn new(latency_ms: u64, seed: Option<u64>) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
            seed,
        }
    }

    pub fn into_store(self) -> RecordStore<ForecastDay> {
        RecordStore::new(Arc::new(self))
    }
}

#[async_trait]
impl DataProvider<ForecastDay> for DailyForecastProvider {
    async fn fetch(&self) -> Result<Vec<ForecastDay>> {
        tokio::time::sleep(self.latency).await;
        let mut rng = crate::make_rng(self.seed);
        Ok(generate_daily_forecast(&mut rng))
    }
}

/// 24-hour forecast feed
pub struct HourlyForecastProvider {
    latency: Duration,
    seed: Option<u64>,
}

impl HourlyForecastProvider {
    pub fn new(latency_ms: u64, seed: Option<u64>) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
            seed,
        }
    }

    pub fn into_store(self) -> RecordStore<ForecastHour> {
        RecordStore::new(Arc::new(self))
    }
}

#[async_trait]
impl DataProvider<ForecastHour> for HourlyForecastProvider {
    async fn fetch(&self) -> Result<Vec<ForecastHour>> {
        tokio::time::sleep(self.latency).await;
        let mut rng = crate::make_rng(self.seed);
        Ok(generate_hourly_forecast(&mut rng))
    }
}

/// Advisory feed
pub struct WeatherAlertProvider {
    latency: Duration,
}

impl WeatherAlertProvider {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }

    pub fn into_store(self) -> RecordStore<WeatherAlert> {
        RecordStore::new(Arc::new(self))
    }
}

#[async_trait]
impl DataProvider<WeatherAlert> for WeatherAlertProvider {
    async fn fetch(&self) -> Result<Vec<WeatherAlert>> {
        tokio::time::sleep(self.latency).await;
        Ok(weather_alerts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_forecast_starts_today_and_spans_a_week() {
        let mut rng = crate::make_rng(Some(1));
        let forecast = generate_daily_forecast(&mut rng);
        assert_eq!(forecast.len(), 7);
        assert_eq!(forecast[0].day, "Today");
        for day in &forecast {
            assert!(day.high_c >= day.low_c);
            assert!(day.precipitation_pct < 100);
        }
    }

    #[test]
    fn hourly_forecast_covers_the_clock() {
        let mut rng = crate::make_rng(Some(1));
        let forecast = generate_hourly_forecast(&mut rng);
        assert_eq!(forecast.len(), 24);
        assert_eq!(forecast[0].time, "12 AM");
        assert_eq!(forecast[12].time, "12 PM");
        assert_eq!(forecast[23].time, "11 PM");
    }

    #[test]
    fn alerts_carry_each_severity() {
        let alerts = weather_alerts();
        assert!(alerts
            .iter()
            .any(|a| a.severity == AlertSeverity::Warning));
        assert!(alerts.iter().any(|a| a.severity == AlertSeverity::Info));
        assert!(alerts.iter().any(|a| a.severity == AlertSeverity::Alert));
    }
}
