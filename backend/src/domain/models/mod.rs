pub mod appointment;
pub mod financial_entry;
pub mod occurrence;

pub use appointment::*;
pub use financial_entry::*;
pub use occurrence::*;
