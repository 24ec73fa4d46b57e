// Core business logic lives here - the brain of the operation
pub mod advisor;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod export;
pub mod fertilizer;
pub mod models;
pub mod query;

pub use advisor::Advisor;
pub use config::AppConfig;
pub use error::Error;
pub use export::{ExportFormat, Exporter};
pub use query::{query, Criteria, FieldCatalog, FieldValue, Queryable, SortDirection};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
