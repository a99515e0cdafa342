//! Error type for the fallible parts of the dashboard core.
//!
//! Date parsing and aggregation are total and never produce these errors;
//! they cover configuration, picker sessions and data mapping.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date '{value}' on entry {entry_id}")]
    InvalidDate { entry_id: String, value: String },

    #[error("Picker session {0} is no longer open")]
    StaleSession(uuid::Uuid),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
