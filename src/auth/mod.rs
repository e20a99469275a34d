mod login;
mod password;
mod store;

use axum::{routing::post, Router};
use sqlx::SqlitePool;

use crate::{db::Timestamp, AppResult, AppState};

pub use password::Hasher;
pub use store::{AdminRecord, CredentialStore};

pub const DEFAULT_ADMIN: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login::login))
        .route("/change-password", post(login::change_password))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChange {
    Changed,
    IncorrectPassword,
    NotUpdated,
}

impl PasswordChange {
    pub fn message(&self) -> &'static str {
        use PasswordChange::*;
        match self {
            Changed => "Password changed successfully",
            IncorrectPassword => "Current password is incorrect",
            NotUpdated => "Failed to update password",
        }
    }
}

/// Credential checks for the single clinic administrator.
#[derive(Clone)]
pub struct Auth {
    store: CredentialStore,
    hasher: Hasher,
}

impl Auth {
    pub fn new(db_pool: SqlitePool, hasher: Hasher) -> Self {
        Self { store: CredentialStore::new(db_pool), hasher }
    }

    /// Checks a username/password pair.
    ///
    /// The first check against an empty credential table creates the default
    /// admin before comparing. An unknown username and a wrong password are
    /// indistinguishable to the caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<bool> {
        let admin = match self.store.find_admin(username).await? {
            Some(admin) => admin,
            None => {
                self.ensure_default_admin().await?;
                let Some(admin) = self.store.find_admin(username).await? else {
                    return Ok(false);
                };
                admin
            }
        };

        self.hasher.verify(password, &admin.password_hash).await
    }

    async fn ensure_default_admin(&self) -> AppResult<()> {
        if self.store.find_admin(DEFAULT_ADMIN).await?.is_some() {
            return Ok(());
        }

        let hash = self.hasher.hash(DEFAULT_PASSWORD).await?;
        if self.store.create_admin(DEFAULT_ADMIN, &hash, Timestamp::now()).await? {
            tracing::warn!("no admin user found in database, created default admin");
        }
        Ok(())
    }

    pub async fn change_password(&self, username: &str, old_password: &str, new_password: &str) -> AppResult<PasswordChange> {
        if !self.authenticate(username, old_password).await? {
            return Ok(PasswordChange::IncorrectPassword);
        }

        let new_hash = self.hasher.hash(new_password).await?;
        if self.store.update_password_hash(username, &new_hash).await? == 0 {
            tracing::error!(%username, "password hash update modified no records");
            return Ok(PasswordChange::NotUpdated);
        }

        tracing::info!(%username, "admin password changed");
        Ok(PasswordChange::Changed)
    }
}
