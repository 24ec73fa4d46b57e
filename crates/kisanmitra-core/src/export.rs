use crate::{models::MarketPrice, Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            "md" | "markdown" => Some(ExportFormat::Markdown),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Exporter for price query results
pub struct Exporter;

impl Exporter {
    /// Export prices to a file with automatic format detection
    pub fn export_to_file<P: AsRef<Path>>(prices: &[MarketPrice], path: P) -> Result<()> {
        let path = path.as_ref();

        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ExportFormat::from_extension)
            .ok_or_else(|| {
                Error::ConfigError(
                    "Could not determine export format from extension. Use .json, .csv, or .md"
                        .to_string(),
                )
            })?;

        Self::export_to_file_with_format(prices, path, format)
    }

    /// Export prices to a file with explicit format
    pub fn export_to_file_with_format<P: AsRef<Path>>(
        prices: &[MarketPrice],
        path: P,
        format: ExportFormat,
    ) -> Result<()> {
        let content = match format {
            ExportFormat::Json => Self::to_json(prices)?,
            ExportFormat::Csv => Self::to_csv(prices),
            ExportFormat::Markdown => Self::to_markdown(prices),
        };

        let mut file = File::create(path)
            .map_err(|e| Error::ConfigError(format!("Failed to create file: {}", e)))?;

        file.write_all(content.as_bytes())
            .map_err(|e| Error::ConfigError(format!("Failed to write file: {}", e)))?;

        Ok(())
    }

    pub fn to_json(prices: &[MarketPrice]) -> Result<String> {
        Ok(serde_json::to_string_pretty(prices)?)
    }

    pub fn to_csv(prices: &[MarketPrice]) -> String {
        let mut output = String::new();

        output.push_str(
            "Crop,Variety,Category,Modal Price,Min Price,Max Price,Unit,Market,District,State,\
             Change,Last Updated\n",
        );

        for price in prices {
            output.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{},{},{}\n",
                Self::escape_csv(&price.crop),
                Self::escape_csv(&price.variety),
                price.category,
                price.price,
                price.min_price,
                price.max_price,
                price.unit,
                Self::escape_csv(&price.market),
                Self::escape_csv(&price.district),
                Self::escape_csv(&price.state),
                price.change,
                price.last_updated.format("%Y-%m-%d"),
            ));
        }

        output
    }

    pub fn to_markdown(prices: &[MarketPrice]) -> String {
        let mut output = String::new();

        output.push_str("# Mandi Price Report\n\n");
        output.push_str(&format!("Total rows: {}\n\n", prices.len()));

        output.push_str(
            "| Crop | Variety | Modal (₹) | Min (₹) | Max (₹) | Unit | Market | District | State | Change |\n",
        );
        output.push_str(
            "|------|---------|-----------|---------|---------|------|--------|----------|-------|--------|\n",
        );

        for price in prices {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {:+} |\n",
                price.crop,
                price.variety,
                price.price,
                price.min_price,
                price.max_price,
                price.unit,
                price.market,
                price.district,
                price.state,
                price.change,
            ));
        }

        // Summary statistics
        if !prices.is_empty() {
            let avg: f64 =
                prices.iter().map(|p| p.price as f64).sum::<f64>() / prices.len() as f64;
            output.push_str(&format!("\nAverage modal price: ₹{:.0}\n", avg));

            let mut state_counts = std::collections::HashMap::new();
            for price in prices {
                *state_counts.entry(price.state.as_str()).or_insert(0) += 1;
            }

            output.push_str("\n## Rows per state\n\n");
            let mut states: Vec<_> = state_counts.into_iter().collect();
            states.sort();
            for (state, count) in states {
                output.push_str(&format!("- {}: {}\n", state, count));
            }
        }

        output
    }

    /// Escape CSV special characters
    fn escape_csv(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropCategory, PriceUnit};
    use chrono::NaiveDate;

    fn create_test_price() -> MarketPrice {
        MarketPrice {
            id: 1,
            crop: "Wheat".to_string(),
            variety: "Sharbati".to_string(),
            category: CropCategory::Cereals,
            price: 2100,
            min_price: 1980,
            max_price: 2250,
            unit: PriceUnit::Quintal,
            market: "Ludhiana Main Mandi".to_string(),
            district: "Ludhiana".to_string(),
            state: "Punjab".to_string(),
            change: -45,
            last_updated: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        }
    }

    #[test]
    fn test_export_format_detection() {
        assert_eq!(
            ExportFormat::from_extension("json"),
            Some(ExportFormat::Json)
        );
        assert_eq!(
            ExportFormat::from_extension("JSON"),
            Some(ExportFormat::Json)
        );
        assert_eq!(ExportFormat::from_extension("csv"), Some(ExportFormat::Csv));
        assert_eq!(
            ExportFormat::from_extension("md"),
            Some(ExportFormat::Markdown)
        );
        assert_eq!(
            ExportFormat::from_extension("markdown"),
            Some(ExportFormat::Markdown)
        );
        assert_eq!(ExportFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_json_export() {
        let prices = vec![create_test_price()];
        let json = Exporter::to_json(&prices).unwrap();
        assert!(json.contains("Wheat"));
        assert!(json.contains("Ludhiana Main Mandi"));
    }

    #[test]
    fn test_csv_export() {
        let prices = vec![create_test_price()];
        let csv = Exporter::to_csv(&prices);
        assert!(csv.starts_with("Crop,Variety"));
        assert!(csv.contains("Wheat,Sharbati,Cereals,2100"));
        assert!(csv.contains("-45"));
    }

    #[test]
    fn test_markdown_export() {
        let prices = vec![create_test_price()];
        let md = Exporter::to_markdown(&prices);
        assert!(md.contains("# Mandi Price Report"));
        assert!(md.contains("| Wheat | Sharbati |"));
        assert!(md.contains("Average modal price: ₹2100"));
        assert!(md.contains("- Punjab: 1"));
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(Exporter::escape_csv("simple"), "simple");
        assert_eq!(Exporter::escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(Exporter::escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}
