pub mod appointment_mapper;
pub mod entry_mapper;
pub mod expense_row_mapper;
