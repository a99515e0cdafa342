//! Recurring expense projection.
//!
//! Recurring ("Fixa") expenses are stored once, on their start date. Before
//! aggregation each one is expanded into one virtual occurrence per calendar
//! month, from its start month through the reference month inclusive, and
//! merged with the one-off expenses. Revenue entries are not projected.

use crate::domain::date_math::{add_months, months_between, CalendarDate};
use crate::domain::models::{EntryKind, FinancialEntry, Occurrence};
use crate::io::mappers::entry_mapper::EntryMapper;
use log::{debug, info, warn};
use shared::FinancialEntry as SharedEntry;

#[derive(Debug, Clone, Default)]
pub struct ExpenseProjector;

impl ExpenseProjector {
    pub fn new() -> Self {
        Self
    }

    /// Project wire entries; entries with an unparseable date are skipped
    pub fn project_dtos(&self, entries: &[SharedEntry], reference: CalendarDate) -> Vec<Occurrence> {
        let domain_entries: Vec<FinancialEntry> = entries
            .iter()
            .filter_map(|dto| match EntryMapper::to_domain(dto) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("⚠️ Skipping financial entry: {}", e);
                    None
                }
            })
            .collect();

        self.project(&domain_entries, reference)
    }

    /// Expand recurring expenses up to `reference` and merge them with one-off expenses.
    ///
    /// The result is ordered newest first, ties broken by id.
    pub fn project(&self, entries: &[FinancialEntry], reference: CalendarDate) -> Vec<Occurrence> {
        let mut occurrences = Vec::new();

        for entry in entries.iter().filter(|entry| entry.is_expense()) {
            match entry.kind {
                EntryKind::OneOff => occurrences.push(Occurrence::from_one_off(entry)),
                EntryKind::Recurring => occurrences.extend(self.expand_recurring(entry, reference)),
            }
        }

        occurrences.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));

        info!(
            "🔮 Projected {} expense occurrences from {} entries up to {}",
            occurrences.len(),
            entries.len(),
            reference
        );
        occurrences
    }

    /// One virtual occurrence per month from the entry's month through the reference month.
    ///
    /// Each date is computed from the start date, so a day clamped in a short
    /// month does not carry over into later months.
    pub fn expand_recurring(&self, entry: &FinancialEntry, reference: CalendarDate) -> Vec<Occurrence> {
        let months = months_between(entry.entry_date, reference);
        if months < 0 {
            debug!("🔮 Recurring entry {} starts after {}, nothing to project", entry.id, reference);
            return Vec::new();
        }

        (0..=months)
            .filter_map(|offset| add_months(entry.entry_date, offset))
            .inspect(|date| {
                if date.day() != entry.entry_date.day() {
                    debug!(
                        "🔮 Recurring entry {} clamped from day {} to {}",
                        entry.id,
                        entry.entry_date.day(),
                        date
                    );
                }
            })
            .map(|date| Occurrence::virtual_for(entry, date))
            .collect()
    }
}
