//! Outbound mail seam
//!
//! Delivery is fire-and-forget: the service logs a send failure and carries
//! on. Actual transport internals are out of scope; the default
//! implementation writes the message to the log.

use async_trait::async_trait;

/// Outbound mail dispatch
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Send a message. No delivery confirmation handling.
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Mail sender that records the message in the log instead of delivering it
pub struct LogMailSender;

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        tracing::info!(recipient, subject, body, "outbound mail");
        Ok(())
    }
}
