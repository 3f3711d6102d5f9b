//! Login use-case service.
//!
//! # Responsibility
//! - Authenticate a username/password pair against stored accounts.
//!
//! # Invariants
//! - Unknown username and wrong password are indistinguishable to the
//!   caller; both surface as `InvalidCredentials`.
//! - Inputs are trimmed of surrounding whitespace before matching.
//! - Plaintext passwords never reach the repository or the logs.

use crate::model::user::User;
use crate::repo::entity_repo::RepoError;
use crate::repo::user_repo::UserRepository;
use crate::service::password::verify_password;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum AuthError {
    /// Uniform failure for unknown user, wrong password, or an unusable
    /// stored hash.
    InvalidCredentials,
    Repo(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCredentials => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Login service over a user repository implementation.
pub struct AuthService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Authenticates one username/password pair.
    ///
    /// # Contract
    /// - Returns the matched account on success.
    /// - Returns `InvalidCredentials` for every non-match, without
    ///   distinguishing the cause.
    pub fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = username.trim();
        let password = password.trim();

        let Some(user) = self.repo.find_by_username(username)? else {
            info!("event=login module=service status=denied");
            return Err(AuthError::InvalidCredentials);
        };

        match verify_password(password, &user.password_hash) {
            Ok(true) => {
                info!("event=login module=service status=ok user_id={}", user.id);
                Ok(user)
            }
            Ok(false) => {
                info!("event=login module=service status=denied");
                Err(AuthError::InvalidCredentials)
            }
            Err(err) => {
                // Unusable stored hash is logged for operators but stays a
                // uniform credential failure for the caller.
                warn!(
                    "event=login module=service status=denied error_code=bad_stored_hash error={err}"
                );
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
