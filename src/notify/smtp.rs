use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::SmtpSettings;

use super::{template, ConfirmationSnapshot, Delivery, Notifier};

struct Relay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

/// Sends confirmations through a STARTTLS relay.
///
/// Built without a relay when credentials are missing; every send is then
/// [`Delivery::Skipped`].
pub struct SmtpNotifier {
    relay: Option<Relay>,
    timeout: Duration,
}

impl SmtpNotifier {
    pub fn new(settings: &SmtpSettings) -> anyhow::Result<SmtpNotifier> {
        let relay = match settings.credentials() {
            Some((email, password)) => {
                let sender = email
                    .parse::<Mailbox>()
                    .with_context(|| format!("SMTP_EMAIL {email:?} is not an address"))?;
                let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)
                    .with_context(|| format!("setting up relay {}", settings.server))?
                    .port(settings.port)
                    .credentials(Credentials::new(email.to_owned(), password.to_owned()))
                    .timeout(Some(settings.timeout))
                    .build();
                Some(Relay { transport, sender })
            }
            None => None,
        };

        Ok(SmtpNotifier { relay, timeout: settings.timeout })
    }

    pub fn is_configured(&self) -> bool {
        self.relay.is_some()
    }
}

fn compose(sender: &Mailbox, snapshot: &ConfirmationSnapshot, recipient: &str) -> anyhow::Result<Message> {
    let to = recipient
        .parse::<Mailbox>()
        .with_context(|| format!("{recipient:?} is not an address"))?;

    Ok(Message::builder()
        .from(sender.clone())
        .to(to)
        .subject(template::SUBJECT)
        .multipart(MultiPart::alternative_plain_html(
            template::render_text(snapshot),
            template::render_html(snapshot),
        ))?)
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_confirmation(&self, snapshot: &ConfirmationSnapshot, recipient: &str) -> Delivery {
        let Some(relay) = &self.relay else {
            tracing::warn!("SMTP credentials not configured, email notification skipped");
            return Delivery::Skipped;
        };

        let message = match compose(&relay.sender, snapshot, recipient) {
            Ok(message) => message,
            Err(err) => {
                tracing::error!("failed to build email: {err:#}");
                return Delivery::Failed(format!("{err:#}"));
            }
        };

        match tokio::time::timeout(self.timeout, relay.transport.send(message)).await {
            Ok(Ok(_)) => {
                tracing::info!(%recipient, "confirmation email sent");
                Delivery::Sent
            }
            Ok(Err(err)) => {
                tracing::error!(%recipient, "failed to send email: {err}");
                Delivery::Failed(err.to_string())
            }
            Err(_) => {
                tracing::error!(%recipient, "email send timed out after {:?}", self.timeout);
                Delivery::Failed("timed out".to_owned())
            }
        }
    }
}
