//! Resend transactional-email client.
//!
//! Thin adapter over Resend's send-email endpoint. One attempt per call,
//! no retry or backoff; a non-success provider status becomes
//! [`Error::Delivery`] with the provider detail logged for operators.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;
use tracing::{error, info};

use crate::config::Config;
use crate::{Error, Result};

const RESEND_SEND_URL: &str = "https://api.resend.com/emails";
const ATTACHMENT_FILENAME: &str = "FitnessPlan.pdf";
const SUBJECT: &str = "Your Personalized 30-Day Fitness Plan";

/// Outgoing email in Resend's wire format.
#[derive(Debug, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
    #[serde(rename = "reply_to", skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<Attachment>,
}

/// Base64-encoded binary attachment.
#[derive(Debug, Serialize)]
pub struct Attachment {
    pub filename: String,
    pub content: String,
}

/// Client for sending plan emails through Resend.
pub struct ResendMailer {
    http_client: reqwest::Client,
    api_key: String,
    from: String,
    reply_to: Option<String>,
    bcc: Option<String>,
}

impl ResendMailer {
    pub fn new(api_key: String, config: &Config) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            from: config.from_email.clone(),
            reply_to: config.reply_to_email.clone(),
            bcc: config.bcc_email.clone(),
        }
    }

    /// Send the rendered plan PDF to a recipient.
    pub async fn send_plan(
        &self,
        to: &str,
        display_name: Option<&str>,
        pdf_bytes: &[u8],
    ) -> Result<()> {
        let email = self.plan_email(to, display_name, pdf_bytes);

        let response = self
            .http_client
            .post(RESEND_SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&email)
            .send()
            .await
            .map_err(|e| Error::Delivery(format!("send call failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Resend send failed: {} - {}", status, body);
            return Err(Error::Delivery(format!("provider returned {}", status)));
        }

        info!("Plan email accepted by provider");
        Ok(())
    }

    /// Build the plan email: fixed HTML template plus the PDF attachment.
    fn plan_email(&self, to: &str, display_name: Option<&str>, pdf_bytes: &[u8]) -> OutboundEmail {
        let name = display_name.unwrap_or("there");
        let html = format!(
            "<p>Hi {},</p>\
             <p>Your 30-day personalized plan is attached as a PDF.</p>\
             <p>Stay consistent!<br/>&mdash; WearMinus Team</p>",
            name
        );

        OutboundEmail {
            from: self.from.clone(),
            to: to.to_string(),
            bcc: self.bcc.clone(),
            reply_to: self.reply_to.clone(),
            subject: SUBJECT.to_string(),
            html,
            attachments: vec![Attachment {
                filename: ATTACHMENT_FILENAME.to_string(),
                content: BASE64.encode(pdf_bytes),
            }],
        }
    }
}
