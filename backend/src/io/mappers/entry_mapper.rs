use crate::domain::date_math::parse_iso;
use crate::domain::models::financial_entry::{EntryKind, FinancialEntry as DomainEntry};
use crate::error::{DashboardError, Result};
use shared::{EntryType, FinancialEntry as SharedEntry};

pub struct EntryMapper;

impl EntryMapper {
    /// Fails when the entry date is not a valid `YYYY-MM-DD` date
    pub fn to_domain(dto: &SharedEntry) -> Result<DomainEntry> {
        let entry_date = parse_iso(&dto.entry_date).ok_or_else(|| DashboardError::InvalidDate {
            entry_id: dto.id.clone(),
            value: dto.entry_date.clone(),
        })?;

        Ok(DomainEntry {
            id: dto.id.clone(),
            entry_date,
            description: dto.description.clone(),
            value: dto.value,
            kind: Self::to_domain_kind(dto.entry_type),
        })
    }

    pub fn to_domain_kind(dto_type: EntryType) -> EntryKind {
        match dto_type {
            EntryType::Recurring => EntryKind::Recurring,
            EntryType::OneOff => EntryKind::OneOff,
        }
    }

    pub fn to_dto_kind(kind: EntryKind) -> EntryType {
        match kind {
            EntryKind::Recurring => EntryType::Recurring,
            EntryKind::OneOff => EntryType::OneOff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: &str, date: &str, value: f64, entry_type: EntryType) -> SharedEntry {
        SharedEntry {
            id: id.to_string(),
            entry_date: date.to_string(),
            description: "Aluguel".to_string(),
            value,
            entry_type,
        }
    }

    #[test]
    fn test_to_domain() {
        let entry = EntryMapper::to_domain(&dto("1", "2024-01-15", -1500.0, EntryType::Recurring)).unwrap();
        assert_eq!(entry.kind, EntryKind::Recurring);
        assert_eq!(entry.entry_date.year_month(), (2024, 1));
        assert!(entry.is_expense());
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let result = EntryMapper::to_domain(&dto("9", "15/01/2024", -10.0, EntryType::OneOff));
        match result {
            Err(DashboardError::InvalidDate { entry_id, value }) => {
                assert_eq!(entry_id, "9");
                assert_eq!(value, "15/01/2024");
            }
            other => panic!("expected invalid date error, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(EntryMapper::to_domain_kind(EntryType::OneOff), EntryKind::OneOff);
        assert_eq!(EntryMapper::to_dto_kind(EntryKind::Recurring), EntryType::Recurring);
    }
}
