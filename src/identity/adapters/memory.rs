//! In-memory identity provider for local runs and tests.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use uuid::Uuid;

use crate::identity::{
    domain::{Credentials, UserId, UserIdentity},
    ports::{AuthError, AuthResult, IdentityProvider},
};

/// Shortest password accepted on account creation.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Thread-safe in-memory identity provider.
///
/// Accounts are keyed by case-folded email address. Passwords are kept only
/// as salted SHA-256 digests. Creating an account signs it in, as hosted
/// providers do.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityProvider {
    state: Arc<RwLock<InMemoryIdentityState>>,
}

#[derive(Debug, Default)]
struct InMemoryIdentityState {
    accounts: HashMap<String, Account>,
    current_user: Option<UserIdentity>,
    offline_reason: Option<String>,
}

#[derive(Debug)]
struct Account {
    identity: UserIdentity,
    password_digest: String,
}

impl InMemoryIdentityProvider {
    /// Creates a provider with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with [`AuthError::Network`] until
    /// [`Self::go_online`] is called.
    ///
    /// # Errors
    ///
    /// Returns a provider error when lock acquisition fails.
    pub fn go_offline(&self, reason: impl Into<String>) -> AuthResult<()> {
        self.write_state()?.offline_reason = Some(reason.into());
        Ok(())
    }

    /// Restores connectivity after [`Self::go_offline`].
    ///
    /// # Errors
    ///
    /// Returns a provider error when lock acquisition fails.
    pub fn go_online(&self) -> AuthResult<()> {
        self.write_state()?.offline_reason = None;
        Ok(())
    }

    fn write_state(&self) -> AuthResult<RwLockWriteGuard<'_, InMemoryIdentityState>> {
        self.state
            .write()
            .map_err(|err| AuthError::provider(std::io::Error::other(err.to_string())))
    }
}

impl InMemoryIdentityState {
    fn ensure_online(&self) -> AuthResult<()> {
        self.offline_reason
            .as_ref()
            .map_or(Ok(()), |reason| Err(AuthError::Network(reason.clone())))
    }
}

fn account_key(email: &str) -> String {
    email.to_lowercase()
}

fn is_well_formed_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    parts.next().is_none()
        && !local.is_empty()
        && !domain.is_empty()
        && !email.chars().any(char::is_whitespace)
}

fn password_digest(user_id: &UserId, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<UserIdentity> {
        let mut state = self.write_state()?;
        state.ensure_online()?;
        if !is_well_formed_email(credentials.email()) {
            return Err(AuthError::InvalidEmail);
        }

        let identity = state
            .accounts
            .get(&account_key(credentials.email()))
            .filter(|account| {
                account.password_digest
                    == password_digest(account.identity.user_id(), credentials.password())
            })
            .map(|account| account.identity.clone())
            .ok_or(AuthError::InvalidCredential)?;

        state.current_user = Some(identity.clone());
        Ok(identity)
    }

    async fn sign_up(&self, credentials: &Credentials) -> AuthResult<UserIdentity> {
        let mut state = self.write_state()?;
        state.ensure_online()?;
        if !is_well_formed_email(credentials.email()) {
            return Err(AuthError::InvalidEmail);
        }
        if credentials.password().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword);
        }
        let key = account_key(credentials.email());
        if state.accounts.contains_key(&key) {
            return Err(AuthError::EmailAlreadyInUse);
        }

        let user_id = UserId::new(Uuid::new_v4().simple().to_string());
        let account = Account {
            password_digest: password_digest(&user_id, credentials.password()),
            identity: UserIdentity::new(user_id, credentials.email()),
        };
        let identity = account.identity.clone();
        state.accounts.insert(key, account);
        state.current_user = Some(identity.clone());
        Ok(identity)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        let mut state = self.write_state()?;
        state.ensure_online()?;
        state.current_user = None;
        Ok(())
    }

    async fn current_user(&self) -> Option<UserIdentity> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.current_user.clone())
    }
}
