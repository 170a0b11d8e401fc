//! Send Plan Lambda - Handles the storefront's send-plan endpoint.
//!
//! Accepts a fitness-plan payload plus an email address, renders the plan
//! into a PDF, and emails it as an attachment through Resend.
//!
//! Response policy is synchronous: delivery is awaited before responding,
//! so a provider failure is observable to the caller as a 502 (with the
//! provider detail going to the operator log only).

use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, json_response, parse_json_body, preflight_response};
use shared::{pdf, render, ApiResponse, Config, ResendMailer, SendPlanRequest, SendPlanResponse};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state shared across requests.
struct AppState {
    mailer: ResendMailer,
}

impl AppState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env();

        // Env var takes precedence; otherwise the key comes from Secrets
        // Manager. The key itself never appears in source or config files.
        let api_key = match std::env::var("RESEND_API_KEY") {
            Ok(key) => key,
            Err(_) => {
                let secret_arn = config
                    .resend_secret_arn
                    .as_deref()
                    .ok_or("RESEND_API_KEY or RESEND_API_KEY_SECRET_ARN must be set")?;
                let aws_config =
                    aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
                let secrets_client = aws_sdk_secretsmanager::Client::new(&aws_config);
                shared::get_provider_api_key(&secrets_client, secret_arn)
                    .await
                    .map_err(|e| format!("Failed to get Resend API key: {}", e))?
            }
        };

        Ok(Self {
            mailer: ResendMailer::new(api_key, &config),
        })
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method();
    if method == Method::OPTIONS {
        return Ok(preflight_response());
    }
    if method != Method::POST {
        return error_response(405, "Method not allowed");
    }

    let request: SendPlanRequest = match parse_json_body(event.body())? {
        Ok(request) => request,
        Err(response) => return Ok(response),
    };

    let email = match request.email.as_deref().filter(|e| !e.trim().is_empty()) {
        Some(email) => email.to_string(),
        None => return error_response(400, "Missing email"),
    };
    let plan = match &request.plan {
        Some(plan) => plan,
        None => return error_response(400, "Missing plan"),
    };

    let document = render(plan, request.display_name());
    let pdf_bytes = pdf::to_bytes(&document);
    info!(
        "Rendered plan into {} page(s), {} bytes",
        document.pages.len(),
        pdf_bytes.len()
    );

    if let Err(e) = state
        .mailer
        .send_plan(&email, request.display_name(), &pdf_bytes)
        .await
    {
        error!("Plan delivery failed: {}", e);
        return error_response(e.status_code(), "Failed to send plan email");
    }

    json_response(
        200,
        &ApiResponse::success(SendPlanResponse {
            message: format!("Plan sent to {}", email),
        }),
    )
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
