//! Domain model for a materialized expense occurrence.
use crate::domain::date_math::{month_key, CalendarDate};
use crate::domain::models::financial_entry::{EntryKind, FinancialEntry};

/// One expense on one date, either a one-off entry or one month of a recurring entry
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub id: String,
    pub source_entry_id: String,
    pub date: CalendarDate,
    pub description: String,
    pub value: f64,
    pub kind: EntryKind,
    /// Derived from a recurring entry, never persisted
    pub is_virtual: bool,
}

impl Occurrence {
    /// Pass a one-off entry through unchanged
    pub fn from_one_off(entry: &FinancialEntry) -> Self {
        Self {
            id: entry.id.clone(),
            source_entry_id: entry.id.clone(),
            date: entry.entry_date,
            description: entry.description.clone(),
            value: entry.value,
            kind: entry.kind,
            is_virtual: false,
        }
    }

    /// Virtual occurrence of a recurring entry on `date`; id is `{entry id}-{YYYY-MM}`
    pub fn virtual_for(entry: &FinancialEntry, date: CalendarDate) -> Self {
        Self {
            id: format!("{}-{}", entry.id, month_key(date)),
            source_entry_id: entry.id.clone(),
            date,
            description: entry.description.clone(),
            value: entry.value,
            kind: entry.kind,
            is_virtual: true,
        }
    }

    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year_month() == (year, month)
    }
}
