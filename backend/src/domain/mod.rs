//! # Domain Module
//!
//! Business logic behind the salon dashboard: calendar date arithmetic, the
//! date / date-range picker, recurring expense projection and the financial
//! summaries shown on the financial tab.
//!
//! ## Module Organization
//!
//! - **date_math**: Calendar date parsing, formatting and month arithmetic
//! - **range_picker**: Picker selection state machine and month grid
//! - **picker_session**: Open picker sessions and the single-session registry
//! - **expense_projector**: Expansion of recurring expenses into monthly occurrences
//! - **financial_aggregator**: Monthly and annual revenue / expense summaries
//! - **dashboard_service**: Financial tab orchestration
//! - **export_service**: CSV export of the expense table
//!
//! ## Core Concepts
//!
//! - **Anchor**: The first date clicked in range mode, before the range is complete
//! - **Occurrence**: One dated expense row, either stored or projected
//! - **Virtual entry**: An occurrence projected from a recurring expense, never stored
//! - **Reference date**: The date whose month and year the summaries describe
//!
//! ## Business Rules
//!
//! - Negative entry values are expenses, positive values are revenue
//! - A recurring expense repeats on the same day of every month up to the reference month
//! - Completed appointments count as revenue on their appointment date
//! - A range selection always satisfies start <= end

pub mod dashboard_service;
pub mod date_math;
pub mod expense_projector;
pub mod export_service;
pub mod financial_aggregator;
pub mod models;
pub mod picker_session;
pub mod range_picker;

pub use dashboard_service::DashboardService;
pub use date_math::CalendarDate;
pub use expense_projector::ExpenseProjector;
pub use export_service::ExportService;
pub use financial_aggregator::{FinancialAggregator, RevenueItem, RevenueSource};
pub use picker_session::{PickerRegistry, PickerSession};
pub use range_picker::{PickerSelection, RangePickerState, SelectionState};
