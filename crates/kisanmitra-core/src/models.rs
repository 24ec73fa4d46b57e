use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::{FieldCatalog, FieldValue, Queryable};

/// One mandi price row - the star of the show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrice {
    pub id: u32,
    pub crop: String,
    pub variety: String,
    pub category: CropCategory,
    /// Modal price in rupees per unit
    pub price: u32,
    pub min_price: u32,
    pub max_price: u32,
    pub unit: PriceUnit,
    pub market: String,
    pub district: String,
    pub state: String,
    /// Change against the previous trading day, rupees (may be negative)
    pub change: i32,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropCategory {
    Cereals,
    Pulses,
    Oilseeds,
    Vegetables,
    Fruits,
    Spices,
    CashCrops,
}

impl CropCategory {
    pub fn all() -> [CropCategory; 7] {
        [
            CropCategory::Cereals,
            CropCategory::Pulses,
            CropCategory::Oilseeds,
            CropCategory::Vegetables,
            CropCategory::Fruits,
            CropCategory::Spices,
            CropCategory::CashCrops,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CropCategory::Cereals => "Cereals",
            CropCategory::Pulses => "Pulses",
            CropCategory::Oilseeds => "Oilseeds",
            CropCategory::Vegetables => "Vegetables",
            CropCategory::Fruits => "Fruits",
            CropCategory::Spices => "Spices",
            CropCategory::CashCrops => "Cash Crops",
        }
    }

    /// Loose produce is priced per kg, everything else per quintal
    pub fn unit(&self) -> PriceUnit {
        match self {
            CropCategory::Vegetables | CropCategory::Fruits => PriceUnit::Kg,
            _ => PriceUnit::Quintal,
        }
    }
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceUnit {
    Kg,
    Quintal,
}

impl std::fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceUnit::Kg => write!(f, "kg"),
            PriceUnit::Quintal => write!(f, "quintal"),
        }
    }
}

impl Queryable for MarketPrice {
    fn field_catalog() -> FieldCatalog<Self> {
        FieldCatalog::builder()
            .number("id", |p: &MarketPrice| FieldValue::Number(p.id as f64))
            .searchable_text("crop", |p: &MarketPrice| FieldValue::Text(p.crop.clone()))
            .searchable_text("variety", |p: &MarketPrice| {
                FieldValue::Text(p.variety.clone())
            })
            .text("category", |p: &MarketPrice| {
                FieldValue::Text(p.category.label().to_string())
            })
            .number("price", |p: &MarketPrice| FieldValue::Number(p.price as f64))
            .number("min_price", |p: &MarketPrice| {
                FieldValue::Number(p.min_price as f64)
            })
            .number("max_price", |p: &MarketPrice| {
                FieldValue::Number(p.max_price as f64)
            })
            .searchable_text("market", |p: &MarketPrice| {
                FieldValue::Text(p.market.clone())
            })
            .searchable_text("district", |p: &MarketPrice| {
                FieldValue::Text(p.district.clone())
            })
            .searchable_text("state", |p: &MarketPrice| FieldValue::Text(p.state.clone()))
            .number("change", |p: &MarketPrice| {
                FieldValue::Number(p.change as f64)
            })
            .text("last_updated", |p: &MarketPrice| {
                FieldValue::Text(p.last_updated.format("%Y-%m-%d").to_string())
            })
            .build()
    }
}

/// A physical mandi or trading yard near the farmer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub id: u32,
    pub name: String,
    pub distance_km: f64,
    pub address: String,
    pub phone: String,
    pub trading_hours: String,
    pub trading_days: Vec<String>,
    pub main_crops: Vec<String>,
    pub facilities: Vec<String>,
    pub average_arrival: String,
    pub state: String,
    pub district: String,
    pub kind: MarketKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketKind {
    Apmc,
    Private,
    Cooperative,
}

impl std::fmt::Display for MarketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketKind::Apmc => write!(f, "APMC"),
            MarketKind::Private => write!(f, "Private"),
            MarketKind::Cooperative => write!(f, "Cooperative"),
        }
    }
}

impl Queryable for Market {
    fn field_catalog() -> FieldCatalog<Self> {
        FieldCatalog::builder()
            .number("id", |m: &Market| FieldValue::Number(m.id as f64))
            .searchable_text("name", |m: &Market| FieldValue::Text(m.name.clone()))
            .number("distance", |m: &Market| FieldValue::Number(m.distance_km))
            .searchable_text("address", |m: &Market| FieldValue::Text(m.address.clone()))
            .searchable_text("district", |m: &Market| {
                FieldValue::Text(m.district.clone())
            })
            .searchable_text("state", |m: &Market| FieldValue::Text(m.state.clone()))
            .text("type", |m: &Market| FieldValue::Text(m.kind.to_string()))
            .tags("main_crops", |m: &Market| {
                FieldValue::Tags(m.main_crops.clone())
            })
            .tags("facilities", |m: &Market| {
                FieldValue::Tags(m.facilities.clone())
            })
            .build()
    }
}

/// A government support scheme farmers can apply to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub deadline: String,
    pub eligibility: Vec<String>,
    pub benefits: Vec<String>,
    pub application_url: String,
}

impl Queryable for Scheme {
    fn field_catalog() -> FieldCatalog<Self> {
        FieldCatalog::builder()
            .number("id", |s: &Scheme| FieldValue::Number(s.id as f64))
            .searchable_text("title", |s: &Scheme| FieldValue::Text(s.title.clone()))
            .searchable_text("description", |s: &Scheme| {
                FieldValue::Text(s.description.clone())
            })
            .text("category", |s: &Scheme| FieldValue::Text(s.category.clone()))
            .text("deadline", |s: &Scheme| FieldValue::Text(s.deadline.clone()))
            .build()
    }
}

/// Crop recommendation for the farmer's region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropAdvice {
    pub id: u32,
    pub name: String,
    /// Fit for the region, 0-100
    pub suitability: u8,
    pub season: Season,
    pub water_requirement: WaterNeed,
    pub soil_types: Vec<String>,
    pub growth_duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Rabi,
    Kharif,
    Zaid,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Rabi => write!(f, "Rabi"),
            Season::Kharif => write!(f, "Kharif"),
            Season::Zaid => write!(f, "Zaid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterNeed {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for WaterNeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterNeed::Low => write!(f, "Low"),
            WaterNeed::Medium => write!(f, "Medium"),
            WaterNeed::High => write!(f, "High"),
        }
    }
}

impl Queryable for CropAdvice {
    fn field_catalog() -> FieldCatalog<Self> {
        FieldCatalog::builder()
            .number("id", |c: &CropAdvice| FieldValue::Number(c.id as f64))
            .searchable_text("name", |c: &CropAdvice| FieldValue::Text(c.name.clone()))
            .searchable_text("description", |c: &CropAdvice| {
                FieldValue::Text(c.description.clone())
            })
            .number("suitability", |c: &CropAdvice| {
                FieldValue::Number(c.suitability as f64)
            })
            .text("season", |c: &CropAdvice| {
                FieldValue::Text(c.season.to_string())
            })
            .text("water", |c: &CropAdvice| {
                FieldValue::Text(c.water_requirement.to_string())
            })
            .tags("soil_types", |c: &CropAdvice| {
                FieldValue::Tags(c.soil_types.clone())
            })
            .build()
    }
}

/// A soil health tip shown in the soil section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilTip {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: TipCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipCategory {
    General,
    Nutrient,
    Conservation,
    Organic,
}

impl std::fmt::Display for TipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipCategory::General => write!(f, "General"),
            TipCategory::Nutrient => write!(f, "Nutrient"),
            TipCategory::Conservation => write!(f, "Conservation"),
            TipCategory::Organic => write!(f, "Organic"),
        }
    }
}

impl Queryable for SoilTip {
    fn field_catalog() -> FieldCatalog<Self> {
        FieldCatalog::builder()
            .number("id", |t: &SoilTip| FieldValue::Number(t.id as f64))
            .searchable_text("title", |t: &SoilTip| FieldValue::Text(t.title.clone()))
            .searchable_text("description", |t: &SoilTip| {
                FieldValue::Text(t.description.clone())
            })
            .text("category", |t: &SoilTip| {
                FieldValue::Text(t.category.to_string())
            })
            .build()
    }
}

/// Current conditions for the weather widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature_c: i32,
    pub condition: SkyCondition,
    pub humidity_pct: u8,
    pub wind_kmh: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkyCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl SkyCondition {
    pub fn all() -> [SkyCondition; 4] {
        [
            SkyCondition::Sunny,
            SkyCondition::PartlyCloudy,
            SkyCondition::Cloudy,
            SkyCondition::Rainy,
        ]
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkyCondition::Sunny => write!(f, "Sunny"),
            SkyCondition::PartlyCloudy => write!(f, "Partly Cloudy"),
            SkyCondition::Cloudy => write!(f, "Cloudy"),
            SkyCondition::Rainy => write!(f, "Rainy"),
        }
    }
}

/// One day in the 7-day forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// "Today" for the first entry, weekday name afterwards
    pub day: String,
    pub date: NaiveDate,
    pub high_c: i32,
    pub low_c: i32,
    pub condition: SkyCondition,
    pub precipitation_pct: u8,
}

/// One hour in the 24-hour forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastHour {
    /// "12 AM" .. "11 PM"
    pub time: String,
    pub temperature_c: i32,
    pub condition: SkyCondition,
    pub precipitation_pct: u8,
}

/// Advisory shown in the weather alerts panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub id: u32,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Alert,
    Info,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Warning => write!(f, "WARNING"),
            AlertSeverity::Alert => write!(f, "ALERT"),
            AlertSeverity::Info => write!(f, "INFO"),
        }
    }
}

/// One point in a crop's price history series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Axis label: weekday, day of month, or month name depending on period
    pub label: String,
    pub price: u32,
    pub average: u32,
    /// Minimum support price line, only for MSP-notified crops
    pub msp: Option<u32>,
}

/// Time range for a price trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl TrendPeriod {
    pub fn display_name(&self) -> &'static str {
        match self {
            TrendPeriod::Weekly => "This Week",
            TrendPeriod::Monthly => "This Month",
            TrendPeriod::Yearly => "This Year",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_unit_follows_produce_type() {
        assert_eq!(CropCategory::Vegetables.unit(), PriceUnit::Kg);
        assert_eq!(CropCategory::Fruits.unit(), PriceUnit::Kg);
        assert_eq!(CropCategory::Cereals.unit(), PriceUnit::Quintal);
        assert_eq!(CropCategory::Spices.unit(), PriceUnit::Quintal);
    }

    #[test]
    fn price_catalog_covers_the_sortable_columns() {
        let catalog = MarketPrice::field_catalog();
        for name in [
            "crop",
            "variety",
            "price",
            "min_price",
            "max_price",
            "market",
            "district",
            "state",
            "change",
            "last_updated",
        ] {
            assert!(catalog.contains(name), "missing field {name}");
        }
        assert!(!catalog.contains("stars"));
    }

    #[test]
    fn market_kind_display_matches_labels() {
        assert_eq!(MarketKind::Apmc.to_string(), "APMC");
        assert_eq!(MarketKind::Cooperative.to_string(), "Cooperative");
    }
}
