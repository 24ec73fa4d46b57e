//! Government scheme catalog. Static content, refreshed rarely in the real
//! service, so the mock just returns the current list after the usual delay.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use kisanmitra_core::models::Scheme;
use kisanmitra_core::Result;

use crate::store::{DataProvider, RecordStore};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn scheme_catalog() -> Vec<Scheme> {
    vec![
        Scheme {
            id: 1,
            title: "Pradhan Mantri Kisan Samman Nidhi (PM-KISAN)".to_string(),
            description: "Income support scheme that provides direct cash transfers to farmers' \
                          bank accounts."
                .to_string(),
            category: "Financial Support".to_string(),
            deadline: "Ongoing".to_string(),
            eligibility: strings(&[
                "All landholding farmers with cultivable land",
                "Subject to certain exclusions for higher income groups",
                "Valid bank account and land records required",
            ]),
            benefits: strings(&[
                "₹6,000 per year in three equal installments",
                "Direct transfer to bank account",
                "No loan repayment required",
            ]),
            application_url: "https://pmkisan.gov.in/".to_string(),
        },
        Scheme {
            id: 2,
            title: "Pradhan Mantri Fasal Bima Yojana (PMFBY)".to_string(),
            description: "Crop insurance scheme to provide financial support to farmers \
                          suffering crop loss/damage due to unforeseen events."
                .to_string(),
            category: "Insurance".to_string(),
            deadline: "Seasonal (Before sowing)".to_string(),
            eligibility: strings(&[
                "All farmers growing notified crops",
                "Both loanee and non-loanee farmers eligible",
                "Must apply before the notified cut-off date",
            ]),
            benefits: strings(&[
                "Comprehensive risk coverage for pre-sowing to post-harvest losses",
                "Low premium rates",
                "Use of technology for quick claim settlement",
            ]),
            application_url: "https://pmfby.gov.in/".to_string(),
        },
        Scheme {
            id: 3,
            title: "Kisan Credit Card (KCC)".to_string(),
            description: "Provides farmers with affordable credit for their agricultural \
                          operations."
                .to_string(),
            category: "Credit".to_string(),
            deadline: "Ongoing".to_string(),
            eligibility: strings(&[
                "All farmers, tenant farmers, sharecroppers, and self-help groups",
                "Good credit history",
                "Land ownership documents or tenancy agreement",
            ]),
            benefits: strings(&[
                "Short-term loans for cultivation needs",
                "Post-harvest expenses and marketing loans",
                "Working capital for maintenance of farm assets",
                "Investment credit for agriculture and allied activities",
            ]),
            application_url: "https://www.nabard.org/content.aspx?id=591".to_string(),
        },
        Scheme {
            id: 4,
            title: "Soil Health Card Scheme".to_string(),
            description: "Provides information on soil health to farmers to help them improve \
                          productivity through judicious use of inputs."
                .to_string(),
            category: "Technical Support".to_string(),
            deadline: "Ongoing".to_string(),
            eligibility: strings(&[
                "All farmers with agricultural land",
                "No specific eligibility criteria",
            ]),
            benefits: strings(&[
                "Free soil testing",
                "Crop-wise recommendations of nutrients and fertilizers",
                "Information on soil health indicators",
                "Advice on soil-related constraints",
            ]),
            application_url: "https://soilhealth.dac.gov.in/".to_string(),
        },
        Scheme {
            id: 5,
            title: "National Mission for Sustainable Agriculture (NMSA)".to_string(),
            description: "Promotes sustainable agriculture through climate change adaptation \
                          measures."
                .to_string(),
            category: "Sustainability".to_string(),
            deadline: "Ongoing".to_string(),
            eligibility: strings(&[
                "Farmers in identified climate-vulnerable districts",
                "Farmers adopting sustainable agriculture practices",
                "Application through local agriculture department",
            ]),
            benefits: strings(&[
                "Assistance for micro irrigation and water conservation",
                "Support for soil health management",
                "Promotion of climate-resilient crop varieties",
            ]),
            application_url: "https://nmsa.dac.gov.in/".to_string(),
        },
    ]
}

/// Mock government-service feed for schemes
pub struct MockSchemeProvider {
    latency: Duration,
}

impl MockSchemeProvider {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }

    pub fn into_store(self) -> RecordStore<Scheme> {
        RecordStore::new(Arc::new(self))
    }
}

#[async_trait]
impl DataProvider<Scheme> for MockSchemeProvider {
    async fn fetch(&self) -> Result<Vec<Scheme>> {
        tokio::time::sleep(self.latency).await;
        Ok(scheme_catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_the_eligibility_checker() {
        // The eligibility module issues one verdict per scheme; the ids must
        // line up so the CLI can join them.
        let catalog = scheme_catalog();
        let verdicts =
            kisanmitra_core::eligibility::check_eligibility(&Default::default());
        assert_eq!(catalog.len(), verdicts.len());
        for (scheme, verdict) in catalog.iter().zip(&verdicts) {
            assert_eq!(scheme.id, verdict.scheme_id);
            assert_eq!(scheme.title, verdict.title);
        }
    }

    #[test]
    fn every_scheme_has_content() {
        for scheme in scheme_catalog() {
            assert!(!scheme.eligibility.is_empty());
            assert!(!scheme.benefits.is_empty());
            assert!(scheme.application_url.starts_with("https://"));
        }
    }
}
