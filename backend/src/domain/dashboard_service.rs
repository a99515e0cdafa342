//! Financial tab orchestration.
//!
//! Turns the raw rows fetched by the API collaborator into the summaries and
//! the expense table the view layer renders. Every call re-derives its result
//! from the full input list; nothing is cached between reference dates.

use crate::config::DashboardConfig;
use crate::domain::date_math::{to_iso, CalendarDate};
use crate::domain::expense_projector::ExpenseProjector;
use crate::domain::financial_aggregator::{FinancialAggregator, RevenueItem, RevenueSource};
use crate::domain::models::Appointment as DomainAppointment;
use crate::domain::range_picker::PickerSelection;
use crate::io::mappers::appointment_mapper::AppointmentMapper;
use crate::io::mappers::expense_row_mapper::ExpenseRowMapper;
use log::{debug, info, warn};
use shared::{Appointment, ExpenseRow, FinancialEntry, FinancialOverview};

#[derive(Debug, Clone)]
pub struct DashboardService {
    config: DashboardConfig,
    projector: ExpenseProjector,
    aggregator: FinancialAggregator,
}

impl DashboardService {
    pub fn new(config: DashboardConfig) -> Self {
        let aggregator = FinancialAggregator::new(config.locale);
        Self {
            config,
            projector: ExpenseProjector::new(),
            aggregator,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Month summary, year summary and expense table for `reference`
    pub fn overview(
        &self,
        entries: &[FinancialEntry],
        appointments: &[Appointment],
        reference: CalendarDate,
    ) -> FinancialOverview {
        info!(
            "📊 Building financial overview for {} from {} entries and {} appointments",
            reference,
            entries.len(),
            appointments.len()
        );

        let occurrences = self.projector.project_dtos(entries, reference);
        let revenue = self.revenue_items(entries, appointments);

        let (year, month) = reference.year_month();
        FinancialOverview {
            reference_date: to_iso(reference),
            month: self.aggregator.summarize_month(&occurrences, &revenue, year, month),
            year: self.aggregator.summarize_year(&occurrences, &revenue, year),
            expenses: occurrences.iter().map(ExpenseRowMapper::to_dto).collect(),
        }
    }

    /// Revenue from exactly one source so a paid service is never counted twice.
    ///
    /// When appointments are supplied, completed appointments are the revenue;
    /// positive entries are used only when there are no appointments at all.
    pub fn revenue_items(&self, entries: &[FinancialEntry], appointments: &[Appointment]) -> Vec<RevenueItem> {
        if appointments.is_empty() {
            debug!("📊 Revenue taken from {} financial entries", entries.len());
            return entries.iter().filter_map(RevenueSource::revenue_item).collect();
        }

        debug!("📊 Revenue taken from {} appointments", appointments.len());
        appointments
            .iter()
            .filter_map(|dto| match AppointmentMapper::to_domain(dto) {
                Ok(appointment) => Some(appointment),
                Err(e) => {
                    warn!("⚠️ Skipping appointment: {}", e);
                    None
                }
            })
            .filter_map(|appointment: DomainAppointment| appointment.revenue_item())
            .collect()
    }

    /// Expense table rows, newest first
    pub fn expense_rows(&self, entries: &[FinancialEntry], reference: CalendarDate) -> Vec<ExpenseRow> {
        self.projector
            .project_dtos(entries, reference)
            .iter()
            .map(ExpenseRowMapper::to_dto)
            .collect()
    }

    /// Expense table rows dated within a picker selection (inclusive)
    pub fn expenses_in_range(
        &self,
        entries: &[FinancialEntry],
        reference: CalendarDate,
        selection: &PickerSelection,
    ) -> Vec<ExpenseRow> {
        let rows: Vec<ExpenseRow> = self
            .projector
            .project_dtos(entries, reference)
            .iter()
            .filter(|occurrence| selection.contains(occurrence.date))
            .map(ExpenseRowMapper::to_dto)
            .collect();

        info!(
            "📊 {} expense rows between {} and {}",
            rows.len(),
            selection.start(),
            selection.end()
        );
        rows
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
