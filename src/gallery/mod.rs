mod handlers;
mod model;
mod workflow;

use axum::{routing::{delete, get}, Router};

use crate::AppState;

pub use model::{GalleryImage, ImageCategory, NewGalleryImage};
pub use workflow::Gallery;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_gallery_images).post(handlers::create_gallery_image))
        .route("/{id}", delete(handlers::delete_gallery_image))
}
