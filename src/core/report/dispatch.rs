//! Email dispatch
//!
//! Turns a rendered report into a single [`EmailMessage`] and hands it to
//! the [`Mailer`]. One send request per invocation, no retries.

use crate::adapters::mail::{EmailMessage, Mailer};
use crate::config::ReportConfig;
use crate::domain::{DispatchError, Result};
use std::sync::Arc;

/// Subject line for a report covering `display_date`
pub fn subject_for(display_date: &str) -> String {
    format!("Vscene report for {display_date}")
}

/// Assembles the outbound message
///
/// # Errors
///
/// Returns a dispatch error if the rendered document is not valid UTF-8.
pub fn build_message(
    rendered_html: &[u8],
    display_date: &str,
    config: &ReportConfig,
) -> Result<EmailMessage> {
    let html_body = std::str::from_utf8(rendered_html)
        .map_err(|e| DispatchError::InvalidMessage(format!("HTML body is not UTF-8: {e}")))?
        .to_string();

    Ok(EmailMessage {
        subject: subject_for(display_date),
        html_body,
        sender: config.sender.clone(),
        recipients: config.recipients.clone(),
    })
}

/// Sends rendered reports through a [`Mailer`]
#[derive(Clone)]
pub struct EmailDispatcher {
    mailer: Arc<dyn Mailer>,
}

impl EmailDispatcher {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Builds the message and submits it once
    pub async fn send(
        &self,
        rendered_html: &[u8],
        display_date: &str,
        config: &ReportConfig,
    ) -> Result<()> {
        let message = build_message(rendered_html, display_date, config)?;

        tracing::debug!(
            subject = %message.subject,
            sender = %message.sender,
            recipients = ?message.recipients,
            "Dispatching report email"
        );

        self.mailer.send(&message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;
    use crate::domain::ReportError;
    use std::path::PathBuf;

    fn config() -> ReportConfig {
        ReportConfig {
            organisation_id: 1,
            table_name: "vscene-daily".to_string(),
            sender: "reports@example.com".to_string(),
            recipients: vec!["a@x.com".to_string(), "b@y.com".to_string()],
            template_path: PathBuf::from("email.html"),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_subject_embeds_display_date() {
        assert_eq!(subject_for("14/03/2024"), "Vscene report for 14/03/2024");
    }

    #[test]
    fn test_build_message() {
        let message = build_message(b"<html></html>", "14/03/2024", &config()).unwrap();
        assert_eq!(message.subject, "Vscene report for 14/03/2024");
        assert_eq!(message.html_body, "<html></html>");
        assert_eq!(message.sender, "reports@example.com");
        assert_eq!(message.recipients, vec!["a@x.com", "b@y.com"]);
    }

    #[test]
    fn test_build_message_rejects_invalid_utf8() {
        let err = build_message(&[0xff, 0xfe], "14/03/2024", &config()).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Dispatch(DispatchError::InvalidMessage(_))
        ));
    }
}
