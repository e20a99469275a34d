use axum::{debug_handler, extract::{Path, State}, Json};

use crate::{AppResult, AppState, Message, ValidJson};

use super::{Gallery, GalleryImage, NewGalleryImage};

#[debug_handler(state = AppState)]
pub(crate) async fn list_gallery_images(
    State(gallery): State<Gallery>,
) -> AppResult<Json<Vec<GalleryImage>>> {
    Ok(Json(gallery.list().await?))
}

#[debug_handler(state = AppState)]
pub(crate) async fn create_gallery_image(
    State(gallery): State<Gallery>,
    ValidJson(new): ValidJson<NewGalleryImage>,
) -> AppResult<Json<GalleryImage>> {
    Ok(Json(gallery.create(new).await?))
}

#[debug_handler(state = AppState)]
pub(crate) async fn delete_gallery_image(
    Path(id): Path<String>,
    State(gallery): State<Gallery>,
) -> AppResult<Json<Message>> {
    gallery.delete(&id).await?;
    Ok(Json(Message::new("Image deleted successfully")))
}
