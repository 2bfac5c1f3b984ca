//! Amazon SES (v2) mailer

use super::traits::{EmailMessage, Mailer};
use crate::domain::{DispatchError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sesv2::error::{DisplayErrorContext, SdkError};
use aws_sdk_sesv2::operation::send_email::SendEmailError;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

const CHARSET: &str = "UTF-8";

/// SES-backed [`Mailer`]
pub struct SesMailer {
    client: aws_sdk_sesv2::Client,
}

impl SesMailer {
    /// Create from a loaded AWS SDK config
    pub fn new(aws_config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_sesv2::Client::new(aws_config),
        }
    }
}

fn content(data: &str) -> Result<Content> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|e| DispatchError::InvalidMessage(e.to_string()).into())
}

fn map_send_error<R>(err: SdkError<SendEmailError, R>) -> DispatchError
where
    R: std::fmt::Debug,
{
    let detail = DisplayErrorContext(&err).to_string();
    match err.as_service_error() {
        Some(SendEmailError::TooManyRequestsException(_))
        | Some(SendEmailError::LimitExceededException(_)) => DispatchError::Throttled(detail),
        Some(SendEmailError::MessageRejected(_))
        | Some(SendEmailError::MailFromDomainNotVerifiedException(_))
        | Some(SendEmailError::AccountSuspendedException(_))
        | Some(SendEmailError::SendingPausedException(_))
        | Some(SendEmailError::BadRequestException(_)) => DispatchError::Rejected(detail),
        _ => DispatchError::SendFailed(detail),
    }
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        let email_content = EmailContent::builder()
            .simple(
                Message::builder()
                    .subject(content(&message.subject)?)
                    .body(Body::builder().html(content(&message.html_body)?).build())
                    .build(),
            )
            .build();

        let destination = Destination::builder()
            .set_to_addresses(Some(message.recipients.clone()))
            .build();

        let output = self
            .client
            .send_email()
            .from_email_address(&message.sender)
            .destination(destination)
            .content(email_content)
            .send()
            .await
            .map_err(map_send_error)?;

        tracing::info!(
            message_id = output.message_id().unwrap_or_default(),
            recipients = message.recipients.len(),
            "Email accepted by SES"
        );

        Ok(())
    }
}
