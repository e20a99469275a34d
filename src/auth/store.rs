use sqlx::SqlitePool;

use crate::db::Timestamp;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminRecord {
    pub username: String,
    pub password_hash: String,
    #[sqlx(try_from = "i64")]
    pub created_at: Timestamp,
}

/// Persistence for administrator credentials, keyed by username.
#[derive(Clone)]
pub struct CredentialStore {
    db_pool: SqlitePool,
}

impl CredentialStore {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    pub async fn find_admin(&self, username: &str) -> sqlx::Result<Option<AdminRecord>> {
        sqlx::query_as("SELECT username,password_hash,created_at FROM admin_users WHERE username=?")
            .bind(username)
            .fetch_optional(&self.db_pool)
            .await
    }

    /// Inserts the record unless the username is taken. Returns whether a row was written.
    pub async fn create_admin(&self, username: &str, password_hash: &str, created_at: Timestamp) -> sqlx::Result<bool> {
        let result = sqlx::query(
            "INSERT INTO admin_users (username,password_hash,created_at) VALUES (?,?,?)
             ON CONFLICT(username) DO NOTHING",
        )
        .bind(username)
        .bind(password_hash)
        .bind(created_at.as_nanos())
        .execute(&self.db_pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn update_password_hash(&self, username: &str, new_hash: &str) -> sqlx::Result<u64> {
        let result = sqlx::query("UPDATE admin_users SET password_hash=? WHERE username=?")
            .bind(new_hash)
            .bind(username)
            .execute(&self.db_pool)
            .await?;

        Ok(result.rows_affected())
    }
}
