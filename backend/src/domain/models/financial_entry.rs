//! Domain model for a financial entry.
use crate::domain::date_math::CalendarDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    OneOff,
    /// Repeats every month from its entry date
    Recurring,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialEntry {
    pub id: String,
    pub entry_date: CalendarDate,
    pub description: String,
    /// Positive for revenue, negative for expense
    pub value: f64,
    pub kind: EntryKind,
}

impl FinancialEntry {
    pub fn is_expense(&self) -> bool {
        self.value < 0.0
    }

    pub fn is_revenue(&self) -> bool {
        self.value > 0.0
    }
}
