use anyhow::Context;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    db::{Timestamp, LIST_CAP},
    res, AppError, AppResult,
};

use super::model::{GalleryImage, NewGalleryImage};

const NOT_FOUND: &str = "Image not found";

#[derive(Clone)]
pub struct Gallery {
    db_pool: SqlitePool,
}

impl Gallery {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    pub async fn create(&self, new: NewGalleryImage) -> AppResult<GalleryImage> {
        let image = GalleryImage {
            id: Uuid::now_v7().to_string(),
            url: new.url,
            title: new.title,
            category: new.category,
            created_at: Timestamp::now(),
        };

        self.insert(&image).await?;
        tracing::info!(id = %image.id, "gallery image added");
        Ok(image)
    }

    async fn insert(&self, image: &GalleryImage) -> AppResult<()> {
        sqlx::query("INSERT INTO gallery_images (id,url,title,category,created_at) VALUES (?,?,?,?,?)")
            .bind(&image.id)
            .bind(&image.url)
            .bind(&image.title)
            .bind(image.category)
            .bind(image.created_at.as_nanos())
            .execute(&self.db_pool)
            .await
            .with_context(|| format!("inserting gallery image {}", image.id))?;
        Ok(())
    }

    /// Newest first.
    pub async fn list(&self) -> AppResult<Vec<GalleryImage>> {
        let images = sqlx::query_as(
            "SELECT id,url,title,category,created_at FROM gallery_images
             ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(LIST_CAP)
        .fetch_all(&self.db_pool)
        .await
        .context("listing gallery images")?;

        Ok(images)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM gallery_images")
            .fetch_one(&self.db_pool)
            .await?;
        Ok(count)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id=?")
            .bind(id)
            .execute(&self.db_pool)
            .await
            .with_context(|| format!("deleting gallery image {id}"))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(NOT_FOUND));
        }

        tracing::info!(%id, "gallery image deleted");
        Ok(())
    }

    /// Fills an empty gallery with the clinic's default pictures.
    ///
    /// Returns how many images were inserted; zero when the gallery already had any.
    pub async fn seed_defaults(&self) -> AppResult<usize> {
        let existing = self.count().await?;
        if existing > 0 {
            tracing::info!("gallery already has {existing} images, skipping seed");
            return Ok(0);
        }

        let images: Vec<GalleryImage> = serde_json::from_str(res::GALLERY_SEED)?;
        for image in &images {
            self.insert(image).await?;
        }

        tracing::info!("seeded {} gallery images", images.len());
        Ok(images.len())
    }
}
