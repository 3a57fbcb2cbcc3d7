//! Identity provider port.

use crate::identity::domain::{Credentials, UserIdentity};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity provider operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Managed authentication service contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verifies existing credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the credentials are rejected or the
    /// provider cannot be reached.
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<UserIdentity>;

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the account cannot be created.
    async fn sign_up(&self, credentials: &Credentials) -> AuthResult<UserIdentity>;

    /// Ends the provider-side session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the provider cannot complete sign-out.
    async fn sign_out(&self) -> AuthResult<()>;

    /// Returns the user the provider currently considers signed in.
    async fn current_user(&self) -> Option<UserIdentity>;
}

/// Errors reported by identity providers.
///
/// The display text is shown to the user verbatim.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The email address is malformed.
    #[error("The email address is badly formatted. (auth/invalid-email)")]
    InvalidEmail,

    /// The password does not meet the provider's strength rule.
    #[error("Password should be at least 6 characters. (auth/weak-password)")]
    WeakPassword,

    /// An account already exists for the email address.
    #[error("The email address is already in use by another account. (auth/email-already-in-use)")]
    EmailAlreadyInUse,

    /// The email/password pair does not match an account.
    #[error("The supplied credentials are incorrect. (auth/invalid-credential)")]
    InvalidCredential,

    /// The provider could not be reached.
    #[error("A network error has occurred: {0} (auth/network-request-failed)")]
    Network(String),

    /// Provider-specific failure.
    #[error("identity provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
