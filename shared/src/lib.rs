//! Shared library for the plan mailer Lambda functions.
//!
//! This crate provides the document renderer, PDF encoder, Resend mailer,
//! and common utilities used by the send-plan Lambda.

pub mod config;
pub mod error;
pub mod http;
pub mod mailer;
pub mod models;
pub mod pdf;
pub mod render;
pub mod secrets;

pub use config::Config;
pub use error::{Error, Result};
pub use mailer::ResendMailer;
pub use models::{ApiResponse, Plan, SendPlanRequest, SendPlanResponse};
pub use render::{render, Document, RenderCursor};
pub use secrets::{get_provider_api_key, get_secret};
