//! Scheme eligibility rules.
//!
//! The rule set mirrors the published criteria of the major central schemes,
//! simplified to the inputs a farmer can answer from memory. Each rule is a
//! pure predicate over the profile, so the checker is trivially testable.

use serde::{Deserialize, Serialize};

/// PM-KISAN excludes higher income groups above this annual income (rupees)
const PM_KISAN_INCOME_CAP: u32 = 200_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandOwnership {
    Own,
    Leased,
    Sharecropping,
    Landless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FarmingType {
    Conventional,
    Organic,
    Natural,
    Mixed,
}

/// What the eligibility form collects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub land_ownership: LandOwnership,
    pub land_size_acres: f64,
    pub farming_type: FarmingType,
    pub crops: Vec<String>,
    pub annual_income: u32,
}

impl Default for FarmerProfile {
    fn default() -> Self {
        Self {
            land_ownership: LandOwnership::Own,
            land_size_acres: 2.0,
            farming_type: FarmingType::Conventional,
            crops: vec!["wheat".to_string()],
            annual_income: 150_000,
        }
    }
}

/// Verdict for one scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub scheme_id: u32,
    pub title: String,
    pub category: String,
    pub eligible: bool,
    /// Why the farmer does NOT qualify; None when eligible
    pub reason: Option<String>,
}

impl EligibilityResult {
    fn eligible(scheme_id: u32, title: &str, category: &str) -> Self {
        Self {
            scheme_id,
            title: title.to_string(),
            category: category.to_string(),
            eligible: true,
            reason: None,
        }
    }

    fn rejected(scheme_id: u32, title: &str, category: &str, reason: &str) -> Self {
        Self {
            scheme_id,
            title: title.to_string(),
            category: category.to_string(),
            eligible: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// Evaluate every known scheme against the profile.
///
/// Always returns one result per scheme so the caller can show the full list
/// with reasons, not just the wins.
pub fn check_eligibility(profile: &FarmerProfile) -> Vec<EligibilityResult> {
    let mut results = Vec::with_capacity(5);

    // PM-KISAN: land-owning farmers below the income cap
    results.push(
        if profile.land_ownership != LandOwnership::Own {
            EligibilityResult::rejected(
                1,
                "Pradhan Mantri Kisan Samman Nidhi (PM-KISAN)",
                "Financial Support",
                "Only for land-owning farmers",
            )
        } else if profile.annual_income >= PM_KISAN_INCOME_CAP {
            EligibilityResult::rejected(
                1,
                "Pradhan Mantri Kisan Samman Nidhi (PM-KISAN)",
                "Financial Support",
                "Income exceeds eligibility limit",
            )
        } else {
            EligibilityResult::eligible(
                1,
                "Pradhan Mantri Kisan Samman Nidhi (PM-KISAN)",
                "Financial Support",
            )
        },
    );

    // PMFBY: open to every farmer growing notified crops
    results.push(EligibilityResult::eligible(
        2,
        "Pradhan Mantri Fasal Bima Yojana (PMFBY)",
        "Insurance",
    ));

    // KCC: needs land ownership or a lease agreement
    results.push(
        if matches!(
            profile.land_ownership,
            LandOwnership::Own | LandOwnership::Leased
        ) {
            EligibilityResult::eligible(3, "Kisan Credit Card (KCC)", "Credit")
        } else {
            EligibilityResult::rejected(
                3,
                "Kisan Credit Card (KCC)",
                "Credit",
                "Requires land ownership or lease agreement",
            )
        },
    );

    // Soil Health Card: universal
    results.push(EligibilityResult::eligible(
        4,
        "Soil Health Card Scheme",
        "Technical Support",
    ));

    // NMSA: organic and natural practices only
    results.push(
        if matches!(
            profile.farming_type,
            FarmingType::Organic | FarmingType::Natural
        ) {
            EligibilityResult::eligible(
                5,
                "National Mission for Sustainable Agriculture (NMSA)",
                "Sustainability",
            )
        } else {
            EligibilityResult::rejected(
                5,
                "National Mission for Sustainable Agriculture (NMSA)",
                "Sustainability",
                "Only for organic/natural farming practices",
            )
        },
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_qualifies_for_pm_kisan() {
        let results = check_eligibility(&FarmerProfile::default());
        let pm_kisan = &results[0];
        assert!(pm_kisan.eligible);
        assert!(pm_kisan.reason.is_none());
    }

    #[test]
    fn high_income_blocks_pm_kisan() {
        let profile = FarmerProfile {
            annual_income: 250_000,
            ..FarmerProfile::default()
        };
        let results = check_eligibility(&profile);
        assert!(!results[0].eligible);
        assert_eq!(
            results[0].reason.as_deref(),
            Some("Income exceeds eligibility limit")
        );
    }

    #[test]
    fn tenant_farmer_blocked_from_pm_kisan_but_not_kcc() {
        let profile = FarmerProfile {
            land_ownership: LandOwnership::Leased,
            ..FarmerProfile::default()
        };
        let results = check_eligibility(&profile);
        assert!(!results[0].eligible);
        assert!(results[2].eligible, "leased land still qualifies for KCC");
    }

    #[test]
    fn landless_farmer_blocked_from_kcc() {
        let profile = FarmerProfile {
            land_ownership: LandOwnership::Landless,
            ..FarmerProfile::default()
        };
        let results = check_eligibility(&profile);
        assert!(!results[2].eligible);
    }

    #[test]
    fn pmfby_and_soil_health_card_are_universal() {
        let profile = FarmerProfile {
            land_ownership: LandOwnership::Landless,
            annual_income: 1_000_000,
            ..FarmerProfile::default()
        };
        let results = check_eligibility(&profile);
        assert!(results[1].eligible);
        assert!(results[3].eligible);
    }

    #[test]
    fn nmsa_needs_organic_or_natural() {
        for (farming_type, expected) in [
            (FarmingType::Conventional, false),
            (FarmingType::Mixed, false),
            (FarmingType::Organic, true),
            (FarmingType::Natural, true),
        ] {
            let profile = FarmerProfile {
                farming_type,
                ..FarmerProfile::default()
            };
            let results = check_eligibility(&profile);
            assert_eq!(results[4].eligible, expected, "{farming_type:?}");
        }
    }

    #[test]
    fn one_result_per_scheme() {
        let results = check_eligibility(&FarmerProfile::default());
        assert_eq!(results.len(), 5);
        let mut ids: Vec<u32> = results.iter().map(|r| r.scheme_id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
