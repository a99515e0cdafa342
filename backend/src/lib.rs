//! Dashboard core for the salon / clinic management app.
//!
//! Holds the date picker state machine, recurring expense projection and the
//! financial summaries. Rows arrive as the wire DTOs defined in `shared`;
//! fetching them is the caller's job.

pub mod config;
pub mod domain;
pub mod error;
pub mod io;

pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
