pub mod appointments;
pub mod auth;
pub mod config;
pub mod db;
pub mod gallery;
pub mod index;
pub mod notify;
pub mod res;

mod appresult;

use std::sync::Arc;

use axum::{extract::FromRef, extract::FromRequest, routing::get, Router};
use serde::Serialize;
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use appresult::{AppError, AppResult};

use appointments::Appointments;
use auth::{Auth, Hasher};
use gallery::Gallery;
use notify::Notifier;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub appointments: Appointments,
    pub gallery: Gallery,
    pub auth: Auth,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, notifier: Arc<dyn Notifier>, hasher: Hasher) -> Self {
        AppState {
            appointments: Appointments::new(db_pool.clone(), notifier),
            gallery: Gallery::new(db_pool.clone()),
            auth: Auth::new(db_pool, hasher),
        }
    }
}

/// JSON body extractor whose rejections become 400 responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// `{"message": ...}` confirmation body.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

impl Message {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

pub fn app(app_state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(index::health))
        .nest("/appointments", appointments::router())
        .nest("/gallery", gallery::router())
        .nest("/admin", auth::router());

    Router::new()
        .route("/api/", get(index::health))
        .nest("/api", api)
        .with_state(app_state)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
