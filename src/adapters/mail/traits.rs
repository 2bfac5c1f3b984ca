//! Mail transport abstraction

use crate::domain::Result;
use async_trait::async_trait;
use serde::Serialize;

/// A fully formed outbound email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    /// Subject line
    pub subject: String,

    /// HTML body
    pub html_body: String,

    /// Sender address
    pub sender: String,

    /// Direct (`To`) recipients, in order
    pub recipients: Vec<String>,
}

/// Submits messages to a delivery service
///
/// One call is one send request. Implementations must not retry or fan out
/// per recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Submit `message` for delivery
    ///
    /// # Errors
    ///
    /// Returns a dispatch error when the service rejects the request.
    async fn send(&self, message: &EmailMessage) -> Result<()>;
}
