use thiserror::Error;

/// Error type for the simulator and its config/output glue.
#[derive(Debug, Error)]
pub enum SirError {
    /// A parameter violates the constraints checked by
    /// [`Parameters::validate`](crate::parameters::Parameters::validate).
    /// Raised before any integration starts; no partial trajectory is produced.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported config format: {0} (expected .toml or .json)")]
    UnsupportedConfig(String),
}
