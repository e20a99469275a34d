use axum::{debug_handler, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult, AppState, ValidJson};

use super::{Auth, PasswordChange};

#[derive(Deserialize)]
pub(crate) struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Deserialize)]
pub(crate) struct ChangePasswordRequest {
    username: String,
    old_password: String,
    new_password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthResponse {
    success: bool,
    message: &'static str,
}

#[debug_handler(state = AppState)]
pub(crate) async fn login(
    State(auth): State<Auth>,
    ValidJson(LoginRequest { username, password }): ValidJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    if !auth.authenticate(&username, &password).await? {
        tracing::info!(%username, "rejected admin login");
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(AuthResponse { success: true, message: "Login successful" }))
}

#[debug_handler(state = AppState)]
pub(crate) async fn change_password(
    State(auth): State<Auth>,
    ValidJson(ChangePasswordRequest { username, old_password, new_password }): ValidJson<ChangePasswordRequest>,
) -> AppResult<Json<AuthResponse>> {
    match auth.change_password(&username, &old_password, &new_password).await? {
        PasswordChange::Changed => Ok(Json(AuthResponse {
            success: true,
            message: "Password changed successfully! You can now login with your new password.",
        })),
        failed => Err(AppError::BadRequest(failed.message().to_owned())),
    }
}
