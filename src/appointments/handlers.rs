use axum::{debug_handler, extract::{Path, State}, Json};

use crate::{AppResult, AppState, Message, ValidJson};

use super::{Appointment, Appointments, NewAppointment, StatusUpdate};

#[debug_handler(state = AppState)]
pub(crate) async fn create_appointment(
    State(appointments): State<Appointments>,
    ValidJson(new): ValidJson<NewAppointment>,
) -> AppResult<Json<Appointment>> {
    Ok(Json(appointments.create(new).await?))
}

#[debug_handler(state = AppState)]
pub(crate) async fn list_appointments(
    State(appointments): State<Appointments>,
) -> AppResult<Json<Vec<Appointment>>> {
    Ok(Json(appointments.list().await?))
}

#[debug_handler(state = AppState)]
pub(crate) async fn update_appointment_status(
    Path(id): Path<String>,
    State(appointments): State<Appointments>,
    ValidJson(StatusUpdate { status }): ValidJson<StatusUpdate>,
) -> AppResult<Json<Appointment>> {
    Ok(Json(appointments.update_status(&id, status).await?))
}

#[debug_handler(state = AppState)]
pub(crate) async fn delete_appointment(
    Path(id): Path<String>,
    State(appointments): State<Appointments>,
) -> AppResult<Json<Message>> {
    appointments.delete(&id).await?;
    Ok(Json(Message::new("Appointment deleted successfully")))
}
