//! Salted password hashing.
//!
//! # Responsibility
//! - Produce and verify salted credential hashes; plaintext is never stored.
//!
//! # Invariants
//! - Stored form is `v1$<base64 salt>$<base64 mac>` (URL-safe, unpadded).
//! - Verification is constant-time on the MAC comparison.
//! - Two hashes of the same password differ (fresh random salt per hash).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use std::error::Error;
use std::fmt::{Display, Formatter};

type HmacSha256 = Hmac<Sha256>;

const HASH_VERSION_V1: &str = "v1";
const SALT_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordHashError {
    /// Stored value is not `version$salt$mac`.
    InvalidFormat,
    /// Stored value carries a version this binary does not support.
    UnsupportedVersion(String),
    /// MAC keying failed for the given salt.
    MacInit,
}

impl Display for PasswordHashError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "malformed password hash"),
            Self::UnsupportedVersion(version) => {
                write!(f, "unsupported password hash version `{version}`")
            }
            Self::MacInit => write!(f, "failed to key password MAC"),
        }
    }
}

impl Error for PasswordHashError {}

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    encode_with_salt(password, &salt)
}

/// Verifies a password against a stored hash.
///
/// Returns `Ok(false)` on a well-formed hash that does not match; `Err`
/// only for malformed or unsupported stored values.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordHashError> {
    let mut parts = stored.splitn(3, '$');
    let version = parts.next().ok_or(PasswordHashError::InvalidFormat)?;
    let salt_part = parts.next().ok_or(PasswordHashError::InvalidFormat)?;
    let mac_part = parts.next().ok_or(PasswordHashError::InvalidFormat)?;

    if version != HASH_VERSION_V1 {
        return Err(PasswordHashError::UnsupportedVersion(version.to_string()));
    }

    let salt = URL_SAFE_NO_PAD
        .decode(salt_part)
        .map_err(|_| PasswordHashError::InvalidFormat)?;
    let expected_mac = URL_SAFE_NO_PAD
        .decode(mac_part)
        .map_err(|_| PasswordHashError::InvalidFormat)?;

    let mut mac =
        HmacSha256::new_from_slice(&salt).map_err(|_| PasswordHashError::MacInit)?;
    mac.update(password.as_bytes());
    Ok(mac.verify_slice(&expected_mac).is_ok())
}

fn encode_with_salt(password: &str, salt: &[u8]) -> Result<String, PasswordHashError> {
    let mut mac = HmacSha256::new_from_slice(salt).map_err(|_| PasswordHashError::MacInit)?;
    mac.update(password.as_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(format!(
        "{}${}${}",
        HASH_VERSION_V1,
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(digest)
    ))
}
