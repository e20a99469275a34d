use std::{str::FromStr, time::Duration};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
    pub smtp: SmtpSettings,
}

/// Outbound email settings. Missing credentials disable sending.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub server: String,
    pub port: u16,
    pub email: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
}

impl SmtpSettings {
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email, password))
            }
            _ => None,
        }
    }
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            server: "smtp.gmail.com".to_owned(),
            port: 587,
            email: None,
            password: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Reads the process environment, after merging a `.env` file if present.
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let db_name = lookup("DB_NAME").unwrap_or("clinic".to_owned());
                format!("sqlite://{db_name}.db?mode=rwc")
            }
        };

        let defaults = SmtpSettings::default();
        let smtp = SmtpSettings {
            server: lookup("SMTP_SERVER").unwrap_or(defaults.server),
            port: parse(&lookup, "SMTP_PORT")?.unwrap_or(defaults.port),
            email: lookup("SMTP_EMAIL"),
            password: lookup("SMTP_PASSWORD"),
            timeout: parse(&lookup, "SMTP_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        };

        Ok(Config {
            database_url,
            max_connections: parse(&lookup, "DB_MAX_CONNECTIONS")?.unwrap_or(16),
            bind_addr: lookup("BIND_ADDR").unwrap_or("0.0.0.0:8080".to_owned()),
            smtp,
        })
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>().with_context(|| format!("{key}={raw:?} is not valid")))
        .transpose()
}
