//! AWS Secrets Manager integration.

use aws_sdk_secretsmanager::Client as SecretsClient;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tokio::sync::RwLock;

use crate::{Error, Result};

/// Cached secrets with lazy initialization.
static SECRETS_CACHE: OnceLock<RwLock<HashMap<String, String>>> = OnceLock::new();

fn get_cache() -> &'static RwLock<HashMap<String, String>> {
    SECRETS_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// JSON-wrapped provider credential, as stored by some deployments.
#[derive(Debug, Deserialize)]
struct ProviderCredential {
    api_key: String,
}

/// Get a secret value from Secrets Manager with caching.
pub async fn get_secret(client: &SecretsClient, secret_arn: &str) -> Result<String> {
    // Check cache first
    {
        let cache = get_cache().read().await;
        if let Some(value) = cache.get(secret_arn) {
            return Ok(value.clone());
        }
    }

    // Fetch from Secrets Manager
    let response = client
        .get_secret_value()
        .secret_id(secret_arn)
        .send()
        .await
        .map_err(|e| Error::Aws(format!("Failed to get secret: {}", e)))?;

    let secret_string = response
        .secret_string()
        .ok_or_else(|| Error::Aws("Secret has no string value".to_string()))?
        .to_string();

    // Cache the result
    {
        let mut cache = get_cache().write().await;
        cache.insert(secret_arn.to_string(), secret_string.clone());
    }

    Ok(secret_string)
}

/// Get the email provider API key from Secrets Manager.
///
/// The secret is either the raw key string or a JSON object with an
/// `api_key` field.
pub async fn get_provider_api_key(client: &SecretsClient, secret_arn: &str) -> Result<String> {
    let secret_string = get_secret(client, secret_arn).await?;
    Ok(parse_api_key(&secret_string))
}

fn parse_api_key(secret_string: &str) -> String {
    match serde_json::from_str::<ProviderCredential>(secret_string) {
        Ok(credential) => credential.api_key,
        Err(_) => secret_string.to_string(),
    }
}

/// Clear the secrets cache (useful for testing or credential rotation).
pub async fn clear_cache() {
    let mut cache = get_cache().write().await;
    cache.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_wrapped_key() {
        let json = r#"{"api_key":"re_123_abc"}"#;
        assert_eq!(parse_api_key(json), "re_123_abc");
    }

    #[test]
    fn test_parse_raw_key() {
        assert_eq!(parse_api_key("re_123_abc"), "re_123_abc");
    }
}
