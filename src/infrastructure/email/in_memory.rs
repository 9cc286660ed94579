use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{application::services::email::EmailService, domain::models::User};

/// Observed side effect of an email send.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SentEmail {
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
}

impl SentEmail {
    pub fn new(
        recipient_email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Captures every send in order instead of delivering it.
#[derive(Default)]
pub struct InMemoryEmailService {
    sent: Arc<RwLock<Vec<SentEmail>>>,
}

impl InMemoryEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl EmailService for InMemoryEmailService {
    async fn send_email(&self, recipient: &User, subject: &str, body: &str) -> anyhow::Result<()> {
        let mut sent = self.sent.write().await;
        sent.push(SentEmail::new(recipient.email.as_str(), subject, body));
        Ok(())
    }
}
