//! Monthly and annual revenue / expense summaries.
//!
//! Expenses come from projected occurrences and are counted once, as the
//! absolute value of each occurrence. Revenue comes from any
//! [`RevenueSource`]: positive financial entries or completed appointments.

use crate::domain::date_math::{month_label, parse_iso, CalendarDate};
use crate::domain::models::{Appointment, FinancialEntry, Occurrence};
use crate::io::mappers::entry_mapper::EntryMapper;
use log::debug;
use shared::{
    Appointment as SharedAppointment, AppointmentStatus, AnnualSummary,
    FinancialEntry as SharedEntry, Locale, MonthlySummary,
};

/// A dated revenue amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueItem {
    pub date: CalendarDate,
    pub value: f64,
}

/// Anything that may contribute revenue on a date
pub trait RevenueSource {
    /// `None` when the record has no usable date or does not count as revenue
    fn revenue_item(&self) -> Option<RevenueItem>;
}

impl RevenueSource for RevenueItem {
    fn revenue_item(&self) -> Option<RevenueItem> {
        Some(*self)
    }
}

impl RevenueSource for FinancialEntry {
    fn revenue_item(&self) -> Option<RevenueItem> {
        self.is_revenue().then_some(RevenueItem {
            date: self.entry_date,
            value: self.value,
        })
    }
}

impl RevenueSource for SharedEntry {
    fn revenue_item(&self) -> Option<RevenueItem> {
        EntryMapper::to_domain(self).ok()?.revenue_item()
    }
}

impl RevenueSource for Appointment {
    fn revenue_item(&self) -> Option<RevenueItem> {
        self.completed.then_some(RevenueItem {
            date: self.date,
            value: self.price,
        })
    }
}

impl RevenueSource for SharedAppointment {
    fn revenue_item(&self) -> Option<RevenueItem> {
        if self.status != AppointmentStatus::Completed {
            return None;
        }
        parse_iso(&self.appointment_date).map(|date| RevenueItem {
            date,
            value: self.price,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FinancialAggregator {
    locale: Locale,
}

impl FinancialAggregator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Summary for one month (1-12)
    pub fn summarize_month<R: RevenueSource>(
        &self,
        occurrences: &[Occurrence],
        revenue: &[R],
        year: i32,
        month: u32,
    ) -> MonthlySummary {
        let revenue_total: f64 = positive_revenue(revenue)
            .filter(|item| item.date.year_month() == (year, month))
            .map(|item| item.value)
            .sum();
        let expenses: f64 = occurrences
            .iter()
            .filter(|o| o.is_in_month(year, month))
            .map(|o| o.value.abs())
            .sum();

        debug!(
            "📊 {:04}-{:02}: revenue {:.2}, expenses {:.2}",
            year, month, revenue_total, expenses
        );

        MonthlySummary {
            revenue: revenue_total,
            expenses,
            net_profit: revenue_total - expenses,
        }
    }

    /// Twelve monthly buckets for one year; months without data are zero
    pub fn summarize_year<R: RevenueSource>(
        &self,
        occurrences: &[Occurrence],
        revenue: &[R],
        year: i32,
    ) -> AnnualSummary {
        let mut revenue_data = vec![0.0; 12];
        let mut expense_data = vec![0.0; 12];

        for item in positive_revenue(revenue).filter(|item| item.date.year() == year) {
            revenue_data[item.date.month() as usize - 1] += item.value;
        }
        for occurrence in occurrences.iter().filter(|o| o.date.year() == year) {
            expense_data[occurrence.date.month() as usize - 1] += occurrence.value.abs();
        }

        let total_revenue: f64 = revenue_data.iter().sum();
        let total_expenses: f64 = expense_data.iter().sum();

        AnnualSummary {
            year,
            labels: (1..=12).map(|m| month_label(m, self.locale).to_string()).collect(),
            revenue_data,
            expense_data,
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
        }
    }
}

fn positive_revenue<'a, R: RevenueSource + 'a>(revenue: &'a [R]) -> impl Iterator<Item = RevenueItem> + 'a {
    revenue
        .iter()
        .filter_map(|source| source.revenue_item())
        .filter(|item| item.value > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EntryKind;
    use shared::EntryType;

    fn date(s: &str) -> CalendarDate {
        parse_iso(s).unwrap()
    }

    fn revenue(date_str: &str, value: f64) -> RevenueItem {
        RevenueItem {
            date: date(date_str),
            value,
        }
    }

    fn expense(id: &str, date_str: &str, value: f64, is_virtual: bool) -> Occurrence {
        Occurrence {
            id: id.to_string(),
            source_entry_id: id.to_string(),
            date: date(date_str),
            description: "Despesa".to_string(),
            value,
            kind: if is_virtual { EntryKind::Recurring } else { EntryKind::OneOff },
            is_virtual,
        }
    }

    #[test]
    fn test_summarize_month() {
        let aggregator = FinancialAggregator::default();
        let summary = aggregator.summarize_month(
            &[expense("1-2024-03", "2024-03-15", -30.0, true)],
            &[revenue("2024-03-05", 100.0)],
            2024,
            3,
        );

        assert_eq!(
            summary,
            MonthlySummary {
                revenue: 100.0,
                expenses: 30.0,
                net_profit: 70.0
            }
        );
    }

    #[test]
    fn test_summarize_month_ignores_other_months_and_negative_revenue() {
        let aggregator = FinancialAggregator::default();
        let summary = aggregator.summarize_month(
            &[
                expense("a", "2024-02-29", -10.0, false),
                expense("b", "2024-03-01", -5.0, false),
                expense("c", "2023-03-01", -7.0, false),
            ],
            &[
                revenue("2024-03-31", 40.0),
                revenue("2024-04-01", 60.0),
                revenue("2024-03-10", -20.0),
            ],
            2024,
            3,
        );

        assert_eq!(summary.revenue, 40.0);
        assert_eq!(summary.expenses, 5.0);
        assert_eq!(summary.net_profit, 35.0);
    }

    #[test]
    fn test_net_profit_can_be_negative() {
        let aggregator = FinancialAggregator::default();
        let summary = aggregator.summarize_month::<RevenueItem>(
            &[expense("a", "2024-03-01", -25.0, false)],
            &[],
            2024,
            3,
        );
        assert_eq!(summary.net_profit, -25.0);
    }

    #[test]
    fn test_empty_year_is_twelve_zeros() {
        let aggregator = FinancialAggregator::default();
        let summary = aggregator.summarize_year::<RevenueItem>(&[], &[], 2024);

        assert_eq!(summary.labels.len(), 12);
        assert_eq!(summary.revenue_data, vec![0.0; 12]);
        assert_eq!(summary.expense_data, vec![0.0; 12]);
        assert_eq!(summary.net_profit, 0.0);
    }

    #[test]
    fn test_summarize_year_buckets_by_month() {
        let aggregator = FinancialAggregator::new(Locale::PtBr);
        let summary = aggregator.summarize_year(
            &[
                expense("r-2024-01", "2024-01-15", -30.0, true),
                expense("r-2024-02", "2024-02-15", -30.0, true),
                expense("o", "2024-12-01", -5.0, false),
                expense("old", "2023-12-01", -99.0, false),
            ],
            &[revenue("2024-01-05", 100.0), revenue("2024-01-20", 50.0), revenue("2025-01-01", 70.0)],
            2024,
        );

        assert_eq!(summary.labels[1], "Fev");
        assert_eq!(summary.revenue_data[0], 150.0);
        assert_eq!(summary.expense_data[0], 30.0);
        assert_eq!(summary.expense_data[1], 30.0);
        assert_eq!(summary.expense_data[11], 5.0);
        assert_eq!(summary.total_revenue, 150.0);
        assert_eq!(summary.total_expenses, 65.0);
        assert_eq!(summary.net_profit, 85.0);
    }

    #[test]
    fn test_wire_entries_as_revenue() {
        let aggregator = FinancialAggregator::default();
        let rows = vec![
            SharedEntry {
                id: "1".to_string(),
                entry_date: "2024-03-05".to_string(),
                description: "Serviço".to_string(),
                value: 100.0,
                entry_type: EntryType::OneOff,
            },
            SharedEntry {
                id: "2".to_string(),
                entry_date: "bad".to_string(),
                description: "Serviço".to_string(),
                value: 900.0,
                entry_type: EntryType::OneOff,
            },
            SharedEntry {
                id: "3".to_string(),
                entry_date: "2024-03-06".to_string(),
                description: "Aluguel".to_string(),
                value: -40.0,
                entry_type: EntryType::Recurring,
            },
        ];

        let summary = aggregator.summarize_month(&[], &rows, 2024, 3);
        assert_eq!(summary.revenue, 100.0);
        assert_eq!(summary.expenses, 0.0);
    }

    #[test]
    fn test_only_completed_appointments_count() {
        let aggregator = FinancialAggregator::default();
        let appointments = vec![
            SharedAppointment {
                id: "1".to_string(),
                appointment_date: "2024-03-05".to_string(),
                client_name: "Ana".to_string(),
                service: "Corte".to_string(),
                price: 80.0,
                status: AppointmentStatus::Completed,
            },
            SharedAppointment {
                id: "2".to_string(),
                appointment_date: "2024-03-06".to_string(),
                client_name: "Bia".to_string(),
                service: "Escova".to_string(),
                price: 60.0,
                status: AppointmentStatus::Scheduled,
            },
        ];

        let summary = aggregator.summarize_month(&[], &appointments, 2024, 3);
        assert_eq!(summary.revenue, 80.0);
    }

    #[test]
    fn test_domain_entries_count_only_when_positive() {
        let entry = FinancialEntry {
            id: "1".to_string(),
            entry_date: date("2024-03-05"),
            description: "Serviço".to_string(),
            value: 120.0,
            kind: EntryKind::OneOff,
        };
        let expense = FinancialEntry {
            value: -120.0,
            ..entry.clone()
        };

        assert_eq!(entry.revenue_item(), Some(revenue("2024-03-05", 120.0)));
        assert_eq!(expense.revenue_item(), None);
    }
}
