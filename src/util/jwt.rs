//! Bearer-token payload decoding.
//!
//! Only the claims segment is read. The signature is the server's concern;
//! the client just needs to know who it is talking as.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

/// Identity claims carried by the session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub user_id: u64,
    #[serde(default)]
    pub organization_id: Option<u64>,
}

/// Claims decoded from a token, before expiry is checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedToken {
    pub identity: Identity,
    /// `exp` claim in seconds since the Unix epoch.
    pub expires_at: Option<u64>,
}

impl DecodedToken {
    pub fn is_expired(&self, now_secs: u64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token must have three dot-separated segments")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is missing identity claims: {0}")]
    Payload(String),
    #[error("token has expired")]
    Expired,
}

#[derive(Deserialize)]
struct Claims {
    username: String,
    user_id: u64,
    #[serde(default)]
    organization_id: Option<u64>,
    #[serde(default)]
    exp: Option<u64>,
}

/// Decode the claims segment of `token`.
///
/// # Errors
///
/// Returns `TokenError` when the token is not three segments, the payload is
/// not base64url JSON, or `username` / `user_id` are missing.
pub fn decode(token: &str) -> Result<DecodedToken, TokenError> {
    let mut segments = token.trim().split('.');
    let (Some(header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(TokenError::Malformed);
    };
    if header.is_empty() || payload.is_empty() {
        return Err(TokenError::Malformed);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    let claims: Claims = serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))?;

    Ok(DecodedToken {
        identity: Identity {
            username: claims.username,
            user_id: claims.user_id,
            organization_id: claims.organization_id,
        },
        expires_at: claims.exp,
    })
}

/// Decode `token` and reject it if already expired at `now_secs`.
///
/// # Errors
///
/// Returns any [`decode`] error, or `TokenError::Expired`.
pub fn decode_identity(token: &str, now_secs: u64) -> Result<Identity, TokenError> {
    let decoded = decode(token)?;
    if decoded.is_expired(now_secs) {
        return Err(TokenError::Expired);
    }
    Ok(decoded.identity)
}
