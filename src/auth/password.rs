use anyhow::anyhow;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::AppResult;

/// Argon2id password hashing, run on the blocking pool.
#[derive(Clone)]
pub struct Hasher {
    argon2: Argon2<'static>,
}

impl Default for Hasher {
    fn default() -> Self {
        Self { argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()) }
    }
}

impl Hasher {
    /// Memory cost is in KiB.
    pub fn with_cost(m_cost: u32, t_cost: u32, p_cost: u32) -> anyhow::Result<Hasher> {
        let params = Params::new(m_cost, t_cost, p_cost, None).map_err(|err| anyhow!("argon2 params: {err}"))?;
        Ok(Self { argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params) })
    }

    /// The cheapest cost argon2 accepts.
    pub fn minimal() -> anyhow::Result<Hasher> {
        Self::with_cost(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST)
    }

    pub async fn hash(&self, password: &str) -> AppResult<String> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();

        let hash = tokio::task::spawn_blocking(move || -> anyhow::Result<String> {
            let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
                .map_err(|err| anyhow!("encoding salt: {err}"))?;
            let hash = argon2
                .hash_password(password.as_bytes(), &salt)
                .map_err(|err| anyhow!("hashing password: {err}"))?;
            Ok(hash.to_string())
        })
        .await??;

        Ok(hash)
    }

    /// Checks `password` using the salt and cost recorded in `hash`.
    pub async fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let hash = hash.to_owned();

        let matches = tokio::task::spawn_blocking(move || match PasswordHash::new(&hash) {
            Ok(parsed) => argon2.verify_password(password.as_bytes(), &parsed).is_ok(),
            Err(err) => {
                tracing::warn!("stored password hash is unreadable: {err}");
                false
            }
        })
        .await?;

        Ok(matches)
    }
}
