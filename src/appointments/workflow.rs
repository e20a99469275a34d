use std::sync::Arc;

use anyhow::Context;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    db::{Timestamp, LIST_CAP},
    notify::{Delivery, Notifier},
    AppError, AppResult,
};

use super::model::{Appointment, AppointmentStatus, NewAppointment};

const NOT_FOUND: &str = "Appointment not found";

#[derive(Clone)]
pub struct Appointments {
    db_pool: SqlitePool,
    notifier: Arc<dyn Notifier>,
}

impl Appointments {
    pub fn new(db_pool: SqlitePool, notifier: Arc<dyn Notifier>) -> Self {
        Self { db_pool, notifier }
    }

    pub async fn create(&self, new: NewAppointment) -> AppResult<Appointment> {
        let appointment = Appointment {
            id: Uuid::now_v7().to_string(),
            name: new.name,
            phone: new.phone,
            email: new.email,
            date: new.date,
            time: new.time,
            service: new.service,
            message: new.message,
            status: AppointmentStatus::Pending,
            created_at: Timestamp::now(),
        };

        sqlx::query(
            "INSERT INTO appointments (id,name,phone,email,date,time,service,message,status,created_at)
             VALUES (?,?,?,?,?,?,?,?,?,?)",
        )
        .bind(&appointment.id)
        .bind(&appointment.name)
        .bind(&appointment.phone)
        .bind(&appointment.email)
        .bind(&appointment.date)
        .bind(&appointment.time)
        .bind(&appointment.service)
        .bind(&appointment.message)
        .bind(appointment.status)
        .bind(appointment.created_at.as_nanos())
        .execute(&self.db_pool)
        .await
        .context("inserting appointment")?;

        tracing::info!(id = %appointment.id, "appointment booked");
        Ok(appointment)
    }

    /// Newest first.
    pub async fn list(&self) -> AppResult<Vec<Appointment>> {
        let appointments = sqlx::query_as(
            "SELECT id,name,phone,email,date,time,service,message,status,created_at FROM appointments
             ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(LIST_CAP)
        .fetch_all(&self.db_pool)
        .await
        .context("listing appointments")?;

        Ok(appointments)
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Appointment>> {
        let appointment = sqlx::query_as(
            "SELECT id,name,phone,email,date,time,service,message,status,created_at FROM appointments WHERE id=?",
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await
        .with_context(|| format!("reading appointment {id}"))?;

        Ok(appointment)
    }

    /// Any status may follow any other. Confirming an appointment with a contact
    /// address also sends the patient a confirmation, whose outcome is only logged.
    pub async fn update_status(&self, id: &str, status: AppointmentStatus) -> AppResult<Appointment> {
        let result = sqlx::query("UPDATE appointments SET status=? WHERE id=?")
            .bind(status)
            .bind(id)
            .execute(&self.db_pool)
            .await
            .with_context(|| format!("updating status of appointment {id}"))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(NOT_FOUND));
        }

        let appointment = self.get(id).await?.ok_or(AppError::NotFound(NOT_FOUND))?;
        tracing::info!(%id, ?status, "appointment status updated");

        if status == AppointmentStatus::Confirmed {
            if let Some(recipient) = appointment.contact_email() {
                self.notify(&appointment, recipient).await;
            }
        }

        Ok(appointment)
    }

    async fn notify(&self, appointment: &Appointment, recipient: &str) {
        let id = &appointment.id;
        match self.notifier.send_confirmation(&appointment.into(), recipient).await {
            Delivery::Sent => tracing::info!(%id, "confirmation email sent for appointment"),
            Delivery::Skipped => tracing::warn!(%id, "email not sent for appointment, SMTP not configured"),
            Delivery::Failed(reason) => tracing::error!(%id, "error sending email for appointment: {reason}"),
        }
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM appointments WHERE id=?")
            .bind(id)
            .execute(&self.db_pool)
            .await
            .with_context(|| format!("deleting appointment {id}"))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(NOT_FOUND));
        }

        tracing::info!(%id, "appointment deleted");
        Ok(())
    }
}
