use anyhow::Context;
use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use time::OffsetDateTime;

use crate::res;

/// Upper bound on rows returned by any listing.
pub const LIST_CAP: i64 = 1000;

/// Opens the pool and applies the embedded schema.
///
/// Connections are never recycled for idleness so that `sqlite::memory:`
/// databases survive for the lifetime of the pool.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let db_pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(database_url)
        .await
        .with_context(|| format!("connecting to {database_url}"))?;

    sqlx::raw_sql(res::SCHEMA)
        .execute(&db_pool)
        .await
        .context("applying schema")?;

    Ok(db_pool)
}

/// Creation time of a stored entity.
///
/// Persisted as Unix nanoseconds so that ordering happens in SQL; rendered as
/// RFC 3339 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(#[serde(with = "time::serde::rfc3339")] pub OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn as_nanos(&self) -> i64 {
        // i64 nanoseconds reach into the 23rd century
        i64::try_from(self.0.unix_timestamp_nanos()).unwrap_or(i64::MAX)
    }
}

impl TryFrom<i64> for Timestamp {
    type Error = time::error::ComponentRange;

    fn try_from(nanos: i64) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(nanos as i128).map(Self)
    }
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    connect("sqlite::memory:", 1).await.unwrap()
}
