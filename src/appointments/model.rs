use serde::{Deserialize, Serialize};

use crate::{db::Timestamp, notify::ConfirmationSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date: String,
    pub time: Option<String>,
    pub service: String,
    pub message: Option<String>,
    pub status: AppointmentStatus,
    #[serde(rename = "createdAt")]
    #[sqlx(try_from = "i64")]
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAppointment {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date: String,
    pub time: Option<String>,
    pub service: String,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Where a confirmation would go, if the patient left an address.
    pub fn contact_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.trim().is_empty())
    }
}

impl From<&Appointment> for ConfirmationSnapshot {
    fn from(appointment: &Appointment) -> Self {
        ConfirmationSnapshot {
            name: Some(appointment.name.clone()),
            service: Some(appointment.service.clone()),
            date: Some(appointment.date.clone()),
            time: appointment.time.clone(),
        }
    }
}
