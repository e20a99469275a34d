use serde::{Deserialize, Serialize};

use crate::db::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ImageCategory {
    Clinic,
    Equipment,
    Team,
    Patients,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub title: String,
    pub category: ImageCategory,
    #[serde(rename = "createdAt")]
    #[sqlx(try_from = "i64")]
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewGalleryImage {
    pub url: String,
    pub title: String,
    pub category: ImageCategory,
}
