//! Configuration management for Lambda functions.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sender address on outgoing mail
    pub from_email: String,
    /// Reply-to address (users cannot reply when unset upstream)
    pub reply_to_email: Option<String>,
    /// Silent copy address for every sent plan
    pub bcc_email: Option<String>,
    /// ARN of the secret holding the Resend API key
    pub resend_secret_arn: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            from_email: env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "onboarding@resend.dev".to_string()),
            reply_to_email: env::var("REPLY_TO_EMAIL").ok(),
            bcc_email: env::var("BCC_EMAIL").ok(),
            resend_secret_arn: env::var("RESEND_API_KEY_SECRET_ARN").ok(),
        }
    }
}
