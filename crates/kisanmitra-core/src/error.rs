use thiserror::Error;

/// All the ways things can go wrong in KisanMitra
///
/// We use thiserror here because it generates the boilerplate for us.
/// Life's too short to manually implement Display and Error traits.
#[derive(Error, Debug)]
pub enum Error {
    /// Query criteria referenced a field the record's catalog does not define.
    /// This is always a caller bug, so it is a hard error rather than a no-op.
    #[error("unknown field in query criteria: {field}")]
    UnknownField { field: String },

    #[error("unknown state: {0}")]
    UnknownState(String),

    #[error("district {district} does not belong to {state}")]
    UnknownDistrict { state: String, district: String },

    #[error("data load failed: {0}")]
    LoadError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
