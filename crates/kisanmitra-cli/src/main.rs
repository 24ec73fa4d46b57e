use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kisanmitra_core::eligibility::{
    check_eligibility, FarmerProfile, FarmingType, LandOwnership,
};
use kisanmitra_core::fertilizer::{self, AreaUnit, FertilizerCrop, SoilTest};
use kisanmitra_core::models::{CropCategory, TrendPeriod};
use kisanmitra_core::{query, Advisor, AppConfig, Criteria, Exporter, SortDirection};
use kisanmitra_data::markets::MockMarketProvider;
use kisanmitra_data::prices::MockPriceProvider;
use kisanmitra_data::schemes::MockSchemeProvider;
use kisanmitra_data::soil::MockSoilTipProvider;
use kisanmitra_data::weather::{
    DailyForecastProvider, HourlyForecastProvider, WeatherAlertProvider,
};
use kisanmitra_data::{crops::MockCropProvider, gazetteer, load_dashboard, trends};

#[derive(Parser)]
#[command(name = "kisanmitra")]
#[command(version, about = "Farming information toolkit: mandi prices, weather, schemes, and crop advice", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the simulated feed latency (milliseconds)
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    /// Fixed RNG seed for reproducible mock data
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Search and filter mandi prices
    Prices {
        /// Free-text search over crop, variety, mandi and location
        query: Option<String>,
        #[arg(long, default_value = "all")]
        state: String,
        #[arg(long, default_value = "all")]
        district: String,
        #[arg(long, default_value = "all")]
        category: String,
        /// Sort field: crop, variety, price, min_price, max_price, market,
        /// district, state, change, last_updated
        #[arg(long, default_value = "crop")]
        sort: String,
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
        /// Show at most N rows
        #[arg(long)]
        limit: Option<usize>,
        /// Write the full result to a .json, .csv or .md file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// List nearby markets
    Markets {
        query: Option<String>,
        #[arg(long, default_value = "all")]
        state: String,
        #[arg(long, default_value = "all")]
        district: String,
        /// Market type: APMC, Private or Cooperative
        #[arg(long = "type", default_value = "all")]
        kind: String,
        #[arg(long, default_value = "distance")]
        sort: String,
        #[arg(long)]
        desc: bool,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Browse government schemes
    Schemes {
        query: Option<String>,
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Price history for a crop
    Trends {
        #[arg(default_value = "wheat")]
        crop: String,
        /// weekly, monthly or yearly
        #[arg(long, default_value = "yearly")]
        period: String,
    },
    /// Weather forecast for the week (or the next 24 hours)
    Forecast {
        #[arg(long)]
        hourly: bool,
    },
    /// Active weather advisories
    Alerts,
    /// Crop recommendations for your region
    Crops {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Soil health tips
    Soil {
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Check which schemes you qualify for
    Eligibility {
        /// own, leased, sharecropping or none
        #[arg(long, default_value = "own")]
        ownership: String,
        #[arg(long, default_value_t = 2.0)]
        land_size: f64,
        /// conventional, organic, natural or mixed
        #[arg(long, default_value = "conventional")]
        farming_type: String,
        #[arg(long, default_value_t = 150_000)]
        income: u32,
        #[arg(long = "crop", default_values_t = vec!["wheat".to_string()])]
        crops: Vec<String>,
    },
    /// Fertilizer dose from a soil test report
    Fertilizer {
        #[arg(long, default_value = "wheat")]
        crop: String,
        #[arg(long, default_value_t = 1.0)]
        area: f64,
        /// acre, hectare or bigha
        #[arg(long, default_value = "acre")]
        unit: String,
        #[arg(long, default_value_t = 280.0)]
        soil_n: f64,
        #[arg(long, default_value_t = 25.0)]
        soil_p: f64,
        #[arg(long, default_value_t = 180.0)]
        soil_k: f64,
    },
    /// Ask the farming assistant a question
    Ask {
        question: Vec<String>,
    },
    /// Summary of everything: weather, prices, schemes, crops
    Dashboard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kisanmitra=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let latency = cli.latency_ms.unwrap_or(config.data.latency_ms);
    let seed = cli.seed.or(config.data.seed);

    match cli.command {
        Commands::Prices {
            query: term,
            state,
            district,
            category,
            sort,
            desc,
            limit,
            export,
        } => {
            check_location_filters(&state, &district)?;
            let category = canonical_category(&category)?;

            let store = MockPriceProvider::new(latency, seed).into_store();
            store.load().await?;

            let criteria = Criteria::new()
                .with_term(term.unwrap_or_default())
                .with_filter("state", state)
                .with_filter("district", district)
                .with_filter("category", category)
                .sorted_by(sort, direction(desc));
            let result = query(&store.records(), &criteria)?;
            tracing::info!(matched = result.len(), "price query complete");

            for price in capped(&result, limit) {
                println!(
                    "{:<28} {:>6} ₹{}/{} [{}-{}]  {}, {}, {}  {:+}  {}",
                    price.crop,
                    format!("({})", price.variety),
                    price.price,
                    price.unit,
                    price.min_price,
                    price.max_price,
                    price.market,
                    price.district,
                    price.state,
                    price.change,
                    price.last_updated.format("%Y-%m-%d"),
                );
            }
            println!("\n{} of {} rows", capped(&result, limit).len(), result.len());

            if let Some(path) = export {
                Exporter::export_to_file(&result, &path)?;
                println!("Exported {} rows to {}", result.len(), path.display());
            }
        }

        Commands::Markets {
            query: term,
            state,
            district,
            kind,
            sort,
            desc,
            limit,
        } => {
            check_location_filters(&state, &district)?;

            let store = MockMarketProvider::new(latency).into_store();
            store.load().await?;

            let criteria = Criteria::new()
                .with_term(term.unwrap_or_default())
                .with_filter("state", state)
                .with_filter("district", district)
                .with_filter("type", kind)
                .sorted_by(sort, direction(desc));
            let result = query(&store.records(), &criteria)?;

            for market in capped(&result, limit) {
                println!(
                    "{:<28} {:>6.1} km  {}  [{}]",
                    market.name, market.distance_km, market.address, market.kind
                );
                println!(
                    "    {} | {} | arrivals {}",
                    market.trading_hours,
                    market.main_crops.join(", "),
                    market.average_arrival
                );
            }
        }

        Commands::Schemes {
            query: term,
            category,
            limit,
        } => {
            let store = MockSchemeProvider::new(latency).into_store();
            store.load().await?;

            let criteria = Criteria::new()
                .with_term(term.unwrap_or_default())
                .with_filter("category", category);
            let result = query(&store.records(), &criteria)?;

            for scheme in capped(&result, limit) {
                println!("{} [{}]", scheme.title, scheme.category);
                println!("    {}", scheme.description);
                println!("    Deadline: {} | Apply: {}", scheme.deadline, scheme.application_url);
            }
        }

        Commands::Trends { crop, period } => {
            let period = parse_period(&period)?;
            if !trends::known_crops().contains(&crop.to_lowercase().as_str()) {
                tracing::warn!(crop = %crop, "no dedicated trend data, using the generic band");
            }
            let series = trends::sample_history(&crop, period, seed);

            println!("{} price trend, {}", crop, period.display_name());
            for point in &series {
                let msp = point
                    .msp
                    .map(|m| format!("  (MSP ₹{m})"))
                    .unwrap_or_default();
                println!("{:>4}  ₹{:<6} avg ₹{}{}", point.label, point.price, point.average, msp);
            }
        }

        Commands::Forecast { hourly } => {
            if hourly {
                let store = HourlyForecastProvider::new(latency, seed).into_store();
                store.load().await?;
                for hour in store.records() {
                    println!(
                        "{:>6}  {:>2}°C  {:<14} {:>3}% rain",
                        hour.time, hour.temperature_c, hour.condition.to_string(), hour.precipitation_pct
                    );
                }
            } else {
                let store = DailyForecastProvider::new(latency, seed).into_store();
                store.load().await?;
                for day in store.records() {
                    println!(
                        "{:<10} {}  {:>2}-{:<2}°C  {:<14} {:>3}% rain",
                        day.day,
                        day.date.format("%d/%m"),
                        day.low_c,
                        day.high_c,
                        day.condition.to_string(),
                        day.precipitation_pct
                    );
                }
            }
        }

        Commands::Alerts => {
            let store = WeatherAlertProvider::new(latency).into_store();
            store.load().await?;
            for alert in store.records() {
                println!(
                    "[{}] {} ({})",
                    alert.severity,
                    alert.title,
                    alert.date.format("%b %d, %Y")
                );
                println!("    {}", alert.description);
            }
        }

        Commands::Crops { limit } => {
            let store = MockCropProvider::new(latency).into_store();
            store.load().await?;

            let criteria = Criteria::new().sorted_by("suitability", SortDirection::Descending);
            let result = query(&store.records(), &criteria)?;

            for crop in capped(&result, limit) {
                println!(
                    "{:<14} {:>3}% fit  {} season, {} water, {}",
                    crop.name,
                    crop.suitability,
                    crop.season,
                    crop.water_requirement,
                    crop.growth_duration
                );
                println!("    {}", crop.description);
            }
        }

        Commands::Soil { category } => {
            let store = MockSoilTipProvider::new(latency).into_store();
            store.load().await?;

            let criteria = Criteria::new().with_filter("category", category);
            let result = query(&store.records(), &criteria)?;

            for tip in &result {
                println!("{} [{}]", tip.title, tip.category);
                println!("    {}", tip.description);
            }
        }

        Commands::Eligibility {
            ownership,
            land_size,
            farming_type,
            income,
            crops,
        } => {
            let profile = FarmerProfile {
                land_ownership: parse_ownership(&ownership)?,
                land_size_acres: land_size,
                farming_type: parse_farming_type(&farming_type)?,
                crops,
                annual_income: income,
            };

            for result in check_eligibility(&profile) {
                if result.eligible {
                    println!("✓ {} [{}]", result.title, result.category);
                } else {
                    println!(
                        "✗ {} [{}]: {}",
                        result.title,
                        result.category,
                        result.reason.as_deref().unwrap_or("not eligible")
                    );
                }
            }
        }

        Commands::Fertilizer {
            crop,
            area,
            unit,
            soil_n,
            soil_p,
            soil_k,
        } => {
            let soil = SoilTest {
                nitrogen: soil_n,
                phosphorus: soil_p,
                potassium: soil_k,
            };
            let dose = fertilizer::recommend(
                FertilizerCrop::from_name(&crop),
                area,
                parse_unit(&unit)?,
                &soil,
            );

            println!("Nutrient deficit for {} {} of {}:", area, unit, crop);
            println!("    Nitrogen   {} kg", dose.nitrogen_kg);
            println!("    Phosphorus {} kg", dose.phosphorus_kg);
            println!("    Potassium  {} kg", dose.potassium_kg);
            println!("Recommended products:");
            println!("    Urea {} kg | DAP {} kg | MOP {} kg", dose.urea_kg, dose.dap_kg, dose.mop_kg);
        }

        Commands::Ask { question } => {
            let advisor = Advisor::new();
            let question = question.join(" ");
            if question.trim().is_empty() {
                bail!(
                    "ask needs a question, e.g. `kisanmitra ask wheat price` (topics: {})",
                    advisor.topics().join(", ")
                );
            }
            println!("{}", advisor.reply(&question));
        }

        Commands::Dashboard => {
            let data = load_dashboard(latency, seed).await?;

            println!(
                "Weather: {}°C, {}, humidity {}%, wind {} km/h\n",
                data.weather.temperature_c,
                data.weather.condition,
                data.weather.humidity_pct,
                data.weather.wind_kmh
            );

            let compact = config.display.compact_limit;

            println!("Mandi prices near {}, {}:", config.location.district, config.location.state);
            let criteria = Criteria::new()
                .with_filter("state", config.location.state.clone())
                .sorted_by("change", SortDirection::Descending);
            let prices = query(&data.prices, &criteria)?;
            for price in prices.iter().take(compact) {
                println!(
                    "    {} ({})  ₹{}/{}  {:+}",
                    price.crop, price.variety, price.price, price.unit, price.change
                );
            }

            println!("\nTop crop picks:");
            let criteria = Criteria::new().sorted_by("suitability", SortDirection::Descending);
            for crop in query(&data.crops, &criteria)?.iter().take(compact) {
                println!("    {} ({}% fit, {})", crop.name, crop.suitability, crop.season);
            }

            println!("\nSchemes:");
            for scheme in data.schemes.iter().take(compact) {
                println!("    {} [{}]", scheme.title, scheme.category);
            }
        }
    }

    Ok(())
}

fn direction(desc: bool) -> SortDirection {
    if desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    }
}

/// Slice the first N rows for display; the engine itself never truncates
fn capped<T>(rows: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) => &rows[..n.min(rows.len())],
        None => rows,
    }
}

/// Reject location filters that cannot match anything, before loading
fn check_location_filters(state: &str, district: &str) -> anyhow::Result<()> {
    let state_active = !state.eq_ignore_ascii_case("all");
    let district_active = !district.eq_ignore_ascii_case("all");

    if state_active {
        gazetteer::districts_of(state).with_context(|| {
            format!("known states: {}", gazetteer::state_names().join(", "))
        })?;
    }
    if state_active && district_active {
        gazetteer::validate_location(state, district)?;
    }
    Ok(())
}

/// Accept category shorthand ("cash") as well as the full label ("Cash Crops")
fn canonical_category(input: &str) -> anyhow::Result<String> {
    if input.eq_ignore_ascii_case("all") {
        return Ok(input.to_string());
    }
    CropCategory::all()
        .iter()
        .find(|c| {
            c.label().eq_ignore_ascii_case(input)
                || c.label()
                    .to_lowercase()
                    .starts_with(&input.to_lowercase())
        })
        .map(|c| c.label().to_string())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "unknown category {input}; one of: {}",
                CropCategory::all().map(|c| c.label()).join(", ")
            )
        })
}

fn parse_period(input: &str) -> anyhow::Result<TrendPeriod> {
    match input.to_lowercase().as_str() {
        "weekly" => Ok(TrendPeriod::Weekly),
        "monthly" => Ok(TrendPeriod::Monthly),
        "yearly" => Ok(TrendPeriod::Yearly),
        _ => bail!("period must be weekly, monthly or yearly"),
    }
}

fn parse_ownership(input: &str) -> anyhow::Result<LandOwnership> {
    match input.to_lowercase().as_str() {
        "own" => Ok(LandOwnership::Own),
        "leased" => Ok(LandOwnership::Leased),
        "sharecropping" => Ok(LandOwnership::Sharecropping),
        "none" | "landless" => Ok(LandOwnership::Landless),
        _ => bail!("ownership must be own, leased, sharecropping or none"),
    }
}

fn parse_farming_type(input: &str) -> anyhow::Result<FarmingType> {
    match input.to_lowercase().as_str() {
        "conventional" => Ok(FarmingType::Conventional),
        "organic" => Ok(FarmingType::Organic),
        "natural" => Ok(FarmingType::Natural),
        "mixed" => Ok(FarmingType::Mixed),
        _ => bail!("farming type must be conventional, organic, natural or mixed"),
    }
}

fn parse_unit(input: &str) -> anyhow::Result<AreaUnit> {
    match input.to_lowercase().as_str() {
        "acre" => Ok(AreaUnit::Acre),
        "hectare" => Ok(AreaUnit::Hectare),
        "bigha" => Ok(AreaUnit::Bigha),
        _ => bail!("unit must be acre, hectare or bigha"),
    }
}
