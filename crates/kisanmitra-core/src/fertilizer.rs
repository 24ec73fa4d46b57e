//! NPK dose calculator.
//!
//! Takes a crop's nutrient targets, subtracts what the soil test says is
//! already available, and converts the deficit into bags of urea, DAP and
//! MOP. Targets are kg per acre; soil values are the lab's kg/ha figures.

use serde::{Deserialize, Serialize};

// Nutrient content of the common fertilizer products
const UREA_N_PCT: f64 = 46.0;
const DAP_P_PCT: f64 = 46.0;
const MOP_K_PCT: f64 = 60.0;

// Lab soil values are reported on a different basis than the per-acre
// targets; these factors bring them onto the same scale.
const SOIL_N_FACTOR: f64 = 0.1;
const SOIL_P_FACTOR: f64 = 2.29;
const SOIL_K_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FertilizerCrop {
    Wheat,
    Rice,
    Maize,
    Potato,
    Other,
}

impl FertilizerCrop {
    /// Parse a user-typed crop name, falling back to generic targets
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "wheat" => FertilizerCrop::Wheat,
            "rice" | "paddy" => FertilizerCrop::Rice,
            "maize" | "corn" => FertilizerCrop::Maize,
            "potato" => FertilizerCrop::Potato,
            _ => FertilizerCrop::Other,
        }
    }

    /// Nutrient targets in kg/acre: (N, P, K)
    fn npk_target(&self) -> (f64, f64, f64) {
        match self {
            FertilizerCrop::Wheat => (120.0, 60.0, 40.0),
            FertilizerCrop::Rice => (100.0, 50.0, 50.0),
            FertilizerCrop::Maize => (150.0, 75.0, 50.0),
            FertilizerCrop::Potato => (180.0, 100.0, 150.0),
            FertilizerCrop::Other => (100.0, 50.0, 40.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    Acre,
    Hectare,
    Bigha,
}

impl AreaUnit {
    /// Conversion to acres (bigha varies by region; this is the common one)
    fn acre_factor(&self) -> f64 {
        match self {
            AreaUnit::Acre => 1.0,
            AreaUnit::Hectare => 2.47,
            AreaUnit::Bigha => 0.625,
        }
    }
}

/// Soil test report values in kg/ha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilTest {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl Default for SoilTest {
    /// Typical mid-range report for alluvial plains soil
    fn default() -> Self {
        Self {
            nitrogen: 280.0,
            phosphorus: 25.0,
            potassium: 180.0,
        }
    }
}

/// Recommended quantities, all in kg for the full plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertilizerDose {
    pub nitrogen_kg: u32,
    pub phosphorus_kg: u32,
    pub potassium_kg: u32,
    pub urea_kg: u32,
    pub dap_kg: u32,
    pub mop_kg: u32,
}

/// Compute the dose for a plot.
///
/// Deficits are floored at zero: a soil already rich in a nutrient gets no
/// product for it.
pub fn recommend(
    crop: FertilizerCrop,
    area: f64,
    unit: AreaUnit,
    soil: &SoilTest,
) -> FertilizerDose {
    let (target_n, target_p, target_k) = crop.npk_target();
    let acres = area * unit.acre_factor();

    let n_deficit = (target_n - soil.nitrogen * SOIL_N_FACTOR).max(0.0) * acres;
    let p_deficit = (target_p - soil.phosphorus * SOIL_P_FACTOR).max(0.0) * acres;
    let k_deficit = (target_k - soil.potassium * SOIL_K_FACTOR).max(0.0) * acres;

    FertilizerDose {
        nitrogen_kg: n_deficit.round() as u32,
        phosphorus_kg: p_deficit.round() as u32,
        potassium_kg: k_deficit.round() as u32,
        urea_kg: (n_deficit * 100.0 / UREA_N_PCT).round() as u32,
        dap_kg: (p_deficit * 100.0 / DAP_P_PCT).round() as u32,
        mop_kg: (k_deficit * 100.0 / MOP_K_PCT).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheat_on_one_acre_with_typical_soil() {
        let dose = recommend(FertilizerCrop::Wheat, 1.0, AreaUnit::Acre, &SoilTest::default());
        // N: 120 - 280*0.1 = 92; P: 60 - 25*2.29 = 2.75; K: 40 - 180*1.2 < 0
        assert_eq!(dose.nitrogen_kg, 92);
        assert_eq!(dose.phosphorus_kg, 3);
        assert_eq!(dose.potassium_kg, 0);
        assert_eq!(dose.urea_kg, 200);
        assert_eq!(dose.dap_kg, 6);
        assert_eq!(dose.mop_kg, 0);
    }

    #[test]
    fn rich_soil_needs_nothing() {
        let soil = SoilTest {
            nitrogen: 2000.0,
            phosphorus: 100.0,
            potassium: 500.0,
        };
        let dose = recommend(FertilizerCrop::Rice, 2.0, AreaUnit::Acre, &soil);
        assert_eq!(dose.urea_kg, 0);
        assert_eq!(dose.dap_kg, 0);
        assert_eq!(dose.mop_kg, 0);
    }

    #[test]
    fn hectare_scales_by_conversion_factor() {
        let soil = SoilTest::default();
        let per_acre = recommend(FertilizerCrop::Wheat, 1.0, AreaUnit::Acre, &soil);
        let per_hectare = recommend(FertilizerCrop::Wheat, 1.0, AreaUnit::Hectare, &soil);
        // 1 hectare = 2.47 acres, rounding happens after scaling
        assert_eq!(
            per_hectare.nitrogen_kg,
            (per_acre.nitrogen_kg as f64 * 2.47).round() as u32
        );
    }

    #[test]
    fn unknown_crop_name_falls_back_to_generic() {
        assert_eq!(FertilizerCrop::from_name("dragonfruit"), FertilizerCrop::Other);
        assert_eq!(FertilizerCrop::from_name("PADDY"), FertilizerCrop::Rice);
        assert_eq!(FertilizerCrop::from_name(" corn "), FertilizerCrop::Maize);
    }

    #[test]
    fn potato_demands_the_most_potash() {
        let soil = SoilTest {
            potassium: 0.0,
            ..SoilTest::default()
        };
        let potato = recommend(FertilizerCrop::Potato, 1.0, AreaUnit::Acre, &soil);
        let wheat = recommend(FertilizerCrop::Wheat, 1.0, AreaUnit::Acre, &soil);
        assert!(potato.mop_kg > wheat.mop_kg);
    }
}
