use std::sync::Arc;

use async_trait::async_trait;

use crate::{application::services::email::EmailService, domain::models::User};

/// Production sender: records each email as a structured `tracing` event.
pub struct LoggingEmailService;

impl LoggingEmailService {
    pub fn new() -> Arc<dyn EmailService> {
        Arc::new(Self) as Arc<dyn EmailService>
    }
}

#[async_trait]
impl EmailService for LoggingEmailService {
    async fn send_email(&self, recipient: &User, subject: &str, body: &str) -> anyhow::Result<()> {
        tracing::info!(
            recipient = %recipient.email,
            user_id = %recipient.id,
            subject,
            body_len = body.len(),
            "sending email"
        );
        Ok(())
    }
}
