//! Soil health tips shown in the soil section.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use kisanmitra_core::models::{SoilTip, TipCategory};
use kisanmitra_core::Result;

use crate::store::{DataProvider, RecordStore};

fn tip(id: u32, title: &str, description: &str, category: TipCategory) -> SoilTip {
    SoilTip {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category,
    }
}

pub fn soil_tips() -> Vec<SoilTip> {
    vec![
        tip(
            1,
            "Regular Soil Testing",
            "Test your soil at least once every two years to monitor nutrient levels, pH, and \
             organic matter content. This helps in making informed decisions about fertilizer \
             application and soil amendments.",
            TipCategory::General,
        ),
        tip(
            2,
            "Crop Rotation",
            "Implement a crop rotation plan to prevent nutrient depletion, break pest cycles, \
             and improve soil structure. Different crops have different nutrient requirements \
             and root structures.",
            TipCategory::General,
        ),
        tip(
            3,
            "Balanced Fertilization",
            "Apply fertilizers based on soil test recommendations rather than fixed schedules. \
             Over-application of nitrogen damages soil biology and leaches into groundwater.",
            TipCategory::Nutrient,
        ),
        tip(
            4,
            "Micronutrient Management",
            "Zinc and iron deficiencies are widespread in intensively cropped soils. Correct \
             them with targeted foliar sprays instead of blanket soil application.",
            TipCategory::Nutrient,
        ),
        tip(
            5,
            "Add Organic Matter",
            "Incorporate farmyard manure, compost, or crop residues every season. Organic \
             matter improves water retention, soil structure, and microbial activity.",
            TipCategory::Organic,
        ),
        tip(
            6,
            "Green Manuring",
            "Grow dhaincha or sunhemp before the kharif crop and plough it in at flowering. A \
             single green manure crop can add 60-80 kg of nitrogen per hectare.",
            TipCategory::Organic,
        ),
        tip(
            7,
            "Mulching",
            "Cover the soil surface with straw or plastic mulch to conserve moisture, moderate \
             soil temperature, and suppress weeds.",
            TipCategory::Conservation,
        ),
        tip(
            8,
            "Minimal Tillage",
            "Reduce ploughing passes where possible. Excessive tillage breaks down soil \
             aggregates, accelerates organic matter loss, and increases erosion risk.",
            TipCategory::Conservation,
        ),
    ]
}

/// Mock content-service feed for soil tips
pub struct MockSoilTipProvider {
    latency: Duration,
}

impl MockSoilTipProvider {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }

    pub fn into_store(self) -> RecordStore<SoilTip> {
        RecordStore::new(Arc::new(self))
    }
}

#[async_trait]
impl DataProvider<SoilTip> for MockSoilTipProvider {
    async fn fetch(&self) -> Result<Vec<SoilTip>> {
        tokio::time::sleep(self.latency).await;
        Ok(soil_tips())
    }
}
