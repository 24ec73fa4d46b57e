//! Crop recommendations for the default region.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use kisanmitra_core::models::{CropAdvice, Season, WaterNeed};
use kisanmitra_core::Result;

use crate::store::{DataProvider, RecordStore};

fn advice(
    id: u32,
    name: &str,
    suitability: u8,
    season: Season,
    water_requirement: WaterNeed,
    soil_types: &[&str],
    growth_duration: &str,
    description: &str,
) -> CropAdvice {
    CropAdvice {
        id,
        name: name.to_string(),
        suitability,
        season,
        water_requirement,
        soil_types: soil_types.iter().map(|s| s.to_string()).collect(),
        growth_duration: growth_duration.to_string(),
        description: description.to_string(),
    }
}

pub fn crop_recommendations() -> Vec<CropAdvice> {
    vec![
        advice(
            1,
            "Wheat",
            95,
            Season::Rabi,
            WaterNeed::Medium,
            &["Loamy", "Clay Loam"],
            "120-150 days",
            "Wheat is a staple food crop that thrives in cool weather. It's ideal for your \
             region's climate and soil conditions.",
        ),
        advice(
            2,
            "Rice",
            85,
            Season::Kharif,
            WaterNeed::High,
            &["Clay", "Clay Loam"],
            "90-120 days",
            "Rice is a water-intensive crop that grows well in humid conditions with consistent \
             rainfall or irrigation.",
        ),
        advice(
            3,
            "Maize (Corn)",
            80,
            Season::Kharif,
            WaterNeed::Medium,
            &["Loamy", "Sandy Loam"],
            "80-110 days",
            "Maize is a versatile crop that adapts well to various soil types and climatic \
             conditions.",
        ),
        advice(
            4,
            "Chickpea",
            90,
            Season::Rabi,
            WaterNeed::Low,
            &["Sandy Loam", "Loamy"],
            "90-120 days",
            "Chickpea is a drought-tolerant legume that improves soil fertility by fixing \
             nitrogen.",
        ),
        advice(
            5,
            "Mustard",
            75,
            Season::Rabi,
            WaterNeed::Low,
            &["Loamy", "Sandy Loam"],
            "110-140 days",
            "Mustard is a cold-tolerant oilseed crop that requires minimal irrigation and can \
             grow in moderately fertile soils.",
        ),
    ]
}

/// Mock agronomy-service feed for crop recommendations
pub struct MockCropProvider {
    latency: Duration,
}

impl MockCropProvider {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }

    pub fn into_store(self) -> RecordStore<CropAdvice> {
        RecordStore::new(Arc::new(self))
    }
}

#[async_trait]
impl DataProvider<CropAdvice> for MockCropProvider {
    async fn fetch(&self) -> Result<Vec<CropAdvice>> {
        tokio::time::sleep(self.latency).await;
        Ok(crop_recommendations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suitability_is_a_percentage() {
        for crop in crop_recommendations() {
            assert!(crop.suitability <= 100);
            assert!(!crop.soil_types.is_empty());
        }
    }

    #[test]
    fn wheat_ranks_first_for_the_region() {
        let crops = crop_recommendations();
        let best = crops.iter().max_by_key(|c| c.suitability).unwrap();
        assert_eq!(best.name, "Wheat");
    }
}
