use crate::domain::date_math::to_iso;
use crate::domain::models::occurrence::Occurrence;
use crate::io::mappers::entry_mapper::EntryMapper;
use shared::ExpenseRow;

pub struct ExpenseRowMapper;

impl ExpenseRowMapper {
    pub fn to_dto(occurrence: &Occurrence) -> ExpenseRow {
        ExpenseRow {
            id: occurrence.id.clone(),
            date: to_iso(occurrence.date),
            description: occurrence.description.clone(),
            value: occurrence.value,
            entry_type: EntryMapper::to_dto_kind(occurrence.kind),
            is_virtual: occurrence.is_virtual,
        }
    }
}
