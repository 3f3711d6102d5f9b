//! Signed, cookie-backed session state.
//!
//! # Responsibility
//! - Encode and verify the tamper-evident session token.
//! - Build and parse the session and one-shot flash cookies.
//!
//! # Invariants
//! - Token format is `v1.<base64 payload>.<base64 sig>` (URL-safe,
//!   unpadded); the signature covers the encoded payload bytes.
//! - The server holds no session table: dropping the cookie or rotating
//!   the secret invalidates every session.
//! - The payload carries the authenticated username only.

use axum::http::HeaderMap;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::error::Error;
use std::fmt::{Display, Formatter};

type HmacSha256 = Hmac<Sha256>;

/// Cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "aspirecrm_session";
/// Cookie carrying the one-shot notice shown on the next listing view.
pub const FLASH_COOKIE: &str = "aspirecrm_flash";

const TOKEN_VERSION_V1: &str = "v1";
const MAX_TOKEN_LEN: usize = 1024;

/// Authenticated-caller claims carried by the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Username established at login; mirrors the store's `users.username`.
    pub user: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    InvalidFormat,
    UnsupportedVersion,
    InvalidSignature,
    InvalidPayload,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "malformed session token"),
            Self::UnsupportedVersion => write!(f, "unsupported session token version"),
            Self::InvalidSignature => write!(f, "session token signature mismatch"),
            Self::InvalidPayload => write!(f, "undecodable session token payload"),
        }
    }
}

impl Error for SessionError {}

/// Encodes claims into a signed session token.
pub fn encode_session(claims: &SessionClaims, secret: &[u8]) -> Result<String, SessionError> {
    let payload_bytes =
        serde_json::to_vec(claims).map_err(|_| SessionError::InvalidPayload)?;
    let payload_part = URL_SAFE_NO_PAD.encode(payload_bytes);

    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|_| SessionError::InvalidPayload)?;
    mac.update(payload_part.as_bytes());
    let sig_part = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{TOKEN_VERSION_V1}.{payload_part}.{sig_part}"))
}

/// Verifies a session token and returns its claims.
pub fn decode_session(token: &str, secret: &[u8]) -> Result<SessionClaims, SessionError> {
    if token.len() > MAX_TOKEN_LEN {
        return Err(SessionError::InvalidFormat);
    }

    let mut parts = token.splitn(3, '.');
    let version = parts.next().ok_or(SessionError::InvalidFormat)?;
    let payload_part = parts.next().ok_or(SessionError::InvalidFormat)?;
    let sig_part = parts.next().ok_or(SessionError::InvalidFormat)?;

    if version != TOKEN_VERSION_V1 {
        return Err(SessionError::UnsupportedVersion);
    }

    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|_| SessionError::InvalidPayload)?;
    mac.update(payload_part.as_bytes());
    let expected = URL_SAFE_NO_PAD
        .decode(sig_part)
        .map_err(|_| SessionError::InvalidFormat)?;
    mac.verify_slice(&expected)
        .map_err(|_| SessionError::InvalidSignature)?;

    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload_part)
        .map_err(|_| SessionError::InvalidPayload)?;
    serde_json::from_slice(&payload_bytes).map_err(|_| SessionError::InvalidPayload)
}

/// Extracts one cookie value from the request `Cookie` header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    for pair in header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if parts.next()? == name {
            return parts.next().map(str::to_string);
        }
    }
    None
}

/// `Set-Cookie` value establishing the session.
pub fn session_set_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value expiring the session immediately.
pub fn session_clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// `Set-Cookie` value carrying a one-shot notice, base64-wrapped so the
/// text stays cookie-safe.
pub fn flash_set_cookie(notice: &str) -> String {
    format!(
        "{FLASH_COOKIE}={}; Path=/; SameSite=Lax",
        URL_SAFE_NO_PAD.encode(notice.as_bytes())
    )
}

/// `Set-Cookie` value consuming the flash notice.
pub fn flash_clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; SameSite=Lax; Max-Age=0")
}

/// Decodes a flash cookie value back to its notice text.
pub fn decode_flash(value: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    String::from_utf8(bytes).ok()
}
