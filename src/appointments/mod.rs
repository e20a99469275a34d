mod handlers;
mod model;
mod workflow;

use axum::{routing::{delete, get, patch}, Router};

use crate::AppState;

pub use model::{Appointment, AppointmentStatus, NewAppointment, StatusUpdate};
pub use workflow::Appointments;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::create_appointment))
        .route("/{id}", delete(handlers::delete_appointment))
        .route("/{id}/status", patch(handlers::update_appointment_status))
}
