//! Domain model for a completed appointment counted as revenue.
use crate::domain::date_math::CalendarDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub date: CalendarDate,
    pub client_name: String,
    pub service: String,
    pub price: f64,
    pub completed: bool,
}
