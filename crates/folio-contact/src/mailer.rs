//! Delivery of composed contact messages.

use std::future::Future;

use crate::error::ContactError;
use crate::form::ContactMessage;

/// Sends a composed contact message.
///
/// Implementations wrap a real email provider; [`TracingMailer`] only logs.
pub trait Mailer: Send + Sync {
    /// # Errors
    ///
    /// Returns `ContactError::Delivery` when the provider fails.
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), ContactError>> + Send;
}

/// Logs each message at `info` instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMailer;

impl Mailer for TracingMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        tracing::info!(
            to = %message.to,
            from = %message.from,
            reply_to = %message.reply_to,
            subject = %message.subject,
            "contact message"
        );
        Ok(())
    }
}
