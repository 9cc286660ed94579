use async_trait::async_trait;

use crate::domain::models::User;

/// Outbound email port. Delivery, bounces and retries belong to the
/// implementation; callers only see success or the raised error.
#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send_email(&self, recipient: &User, subject: &str, body: &str) -> anyhow::Result<()>;
}
