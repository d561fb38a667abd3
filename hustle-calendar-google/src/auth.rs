//! OAuth for service accounts: a signed JWT assertion exchanged for a
//! bearer token (no user interaction, no refresh token).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::credentials::ServiceAccountKey;

pub const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Google caps assertion lifetime at one hour
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: String,
}

/// Build and sign the RS256 assertion for `key`, issued at `now`.
pub fn sign_assertion(key: &ServiceAccountKey, now: DateTime<Utc>) -> Result<String> {
    let claims = AssertionClaims {
        iss: key.client_email.clone(),
        scope: CALENDAR_SCOPE.to_string(),
        aud: key.token_uri.clone(),
        iat: now.timestamp(),
        exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .context("Invalid service account private key")?;

    jsonwebtoken::encode(&header, &claims, &encoding_key)
        .context("Failed to sign service account assertion")
}

/// Exchange a fresh assertion for an access token at the key's `token_uri`.
pub async fn fetch_access_token(
    http: &reqwest::Client,
    key: &ServiceAccountKey,
) -> Result<AccessToken> {
    let assertion = sign_assertion(key, Utc::now())?;

    debug!("Requesting access token for {}", key.client_email);

    let response = http
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await
        .with_context(|| format!("Failed to reach token endpoint {}", key.token_uri))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!(
            "Token request for {} failed: {} {}",
            key.client_email,
            status,
            body
        );
    }

    response
        .json::<AccessToken>()
        .await
        .context("Failed to parse token response")
}
