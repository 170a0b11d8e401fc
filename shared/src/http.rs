//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::ApiResponse;

/// Permissive CORS so the storefront frontend can call the endpoint directly.
const ALLOW_ORIGIN: (&str, &str) = ("access-control-allow-origin", "*");
const ALLOW_METHODS: (&str, &str) = ("access-control-allow-methods", "POST, OPTIONS");
const ALLOW_HEADERS: (&str, &str) = ("access-control-allow-headers", "Content-Type");

/// Create a JSON response with the given status code and data.
///
/// All responses carry the CORS origin header.
pub fn json_response<T: Serialize>(
    status: u16,
    data: &T,
) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .body(Body::from(serde_json::to_string(data)?))
        .expect("Failed to build response"))
}

/// Create an error response with the given status code and message.
pub fn error_response(
    status: u16,
    message: impl Into<String>,
) -> Result<Response<Body>, lambda_http::Error> {
    json_response(status, &ApiResponse::<()>::error(message))
}

/// Bare 200 answering a cross-origin preflight.
pub fn preflight_response() -> Response<Body> {
    Response::builder()
        .status(200)
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .header(ALLOW_METHODS.0, ALLOW_METHODS.1)
        .header(ALLOW_HEADERS.0, ALLOW_HEADERS.1)
        .body(Body::Empty)
        .expect("Failed to build preflight response")
}

/// Parse request body as JSON, returning a 400 response on failure.
///
/// Returns `Ok(Ok(T))` on successful parse, `Ok(Err(Response))` on parse error (400),
/// or `Err(lambda_http::Error)` on serialization failure.
pub fn parse_json_body<T: DeserializeOwned>(
    body: &Body,
) -> Result<Result<T, Response<Body>>, lambda_http::Error> {
    match serde_json::from_slice(body.as_ref()) {
        Ok(parsed) => Ok(Ok(parsed)),
        Err(e) => {
            let response = error_response(400, format!("Invalid request body: {}", e))?;
            Ok(Err(response))
        }
    }
}
