use crate::domain::date_math::parse_iso;
use crate::domain::models::appointment::Appointment as DomainAppointment;
use crate::error::{DashboardError, Result};
use shared::{Appointment as SharedAppointment, AppointmentStatus};

pub struct AppointmentMapper;

impl AppointmentMapper {
    pub fn to_domain(dto: &SharedAppointment) -> Result<DomainAppointment> {
        let date = parse_iso(&dto.appointment_date).ok_or_else(|| DashboardError::InvalidDate {
            entry_id: dto.id.clone(),
            value: dto.appointment_date.clone(),
        })?;

        Ok(DomainAppointment {
            id: dto.id.clone(),
            date,
            client_name: dto.client_name.clone(),
            service: dto.service.clone(),
            price: dto.price,
            completed: dto.status == AppointmentStatus::Completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_domain_marks_completed() {
        let dto = SharedAppointment {
            id: "5".to_string(),
            appointment_date: "2024-03-05".to_string(),
            client_name: "Ana".to_string(),
            service: "Corte".to_string(),
            price: 80.0,
            status: AppointmentStatus::Completed,
        };
        let appointment = AppointmentMapper::to_domain(&dto).unwrap();
        assert!(appointment.completed);

        let cancelled = SharedAppointment {
            status: AppointmentStatus::Cancelled,
            ..dto.clone()
        };
        assert!(!AppointmentMapper::to_domain(&cancelled).unwrap().completed);

        let broken = SharedAppointment {
            appointment_date: "2024-3-5".to_string(),
            ..dto
        };
        assert!(AppointmentMapper::to_domain(&broken).is_err());
    }
}
