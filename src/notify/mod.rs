//! Best-effort patient notifications.
//!
//! A [`Notifier`] never returns an error: every failure is folded into a
//! [`Delivery`] which the caller has to look at (it is `#[must_use]`) and log.

mod smtp;
mod template;

use async_trait::async_trait;

pub use smtp::SmtpNotifier;

/// Outcome of one notification attempt.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Transport credentials are not configured; nothing was attempted.
    Skipped,
    Failed(String),
}

/// Appointment fields a confirmation message is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationSnapshot {
    pub name: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

impl ConfirmationSnapshot {
    pub fn name(&self) -> &str {
        present(&self.name).unwrap_or("Patient")
    }

    pub fn service(&self) -> &str {
        present(&self.service).unwrap_or("N/A")
    }

    pub fn date(&self) -> &str {
        present(&self.date).unwrap_or("N/A")
    }

    pub fn time(&self) -> &str {
        present(&self.time).unwrap_or("To be confirmed")
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_confirmation(&self, snapshot: &ConfirmationSnapshot, recipient: &str) -> Delivery;
}
