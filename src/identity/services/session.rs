//! Session creation and teardown on top of the identity provider.

use crate::identity::{
    domain::{Credentials, Session},
    ports::{AuthResult, IdentityProvider},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Session lifecycle service.
pub struct SessionService<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    provider: Arc<P>,
    clock: Arc<C>,
}

impl<P, C> Clone for SessionService<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<P, C> SessionService<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates a session service.
    #[must_use]
    pub const fn new(provider: Arc<P>, clock: Arc<C>) -> Self {
        Self { provider, clock }
    }

    /// Returns the clock sessions are stamped with.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Signs in with existing credentials and starts a session.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`](crate::identity::ports::AuthError)
    /// unchanged.
    pub async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session> {
        let user = self.provider.sign_in(credentials).await?;
        info!(user_id = %user.user_id(), "signed in");
        Ok(Session::start(user, &*self.clock))
    }

    /// Creates an account and starts a session for it.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`](crate::identity::ports::AuthError)
    /// unchanged.
    pub async fn sign_up(&self, credentials: &Credentials) -> AuthResult<Session> {
        let user = self.provider.sign_up(credentials).await?;
        info!(user_id = %user.user_id(), "account created");
        Ok(Session::start(user, &*self.clock))
    }

    /// Ends `session` at the provider.
    ///
    /// On success the caller drops the session and everything scoped to it.
    /// On failure the session stays valid.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`](crate::identity::ports::AuthError)
    /// unchanged.
    pub async fn sign_out(&self, session: &Session) -> AuthResult<()> {
        self.provider.sign_out().await?;
        info!(user_id = %session.user_id(), "signed out");
        Ok(())
    }

    /// Rebuilds a session for the user the provider still holds as signed
    /// in, if any.
    pub async fn resume(&self) -> Option<Session> {
        let user = self.provider.current_user().await?;
        Some(Session::start(user, &*self.clock))
    }
}
