//! Authenticated user identity and the session that carries it.

use super::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Identity returned by the provider after successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    user_id: UserId,
    email: String,
}

impl UserIdentity {
    /// Creates an identity value.
    #[must_use]
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the account email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Signed-in user session.
///
/// A session exists from a successful sign-in or sign-up until sign-out.
/// It replaces any process-wide notion of a current user: whoever needs the
/// owner identity is handed the session explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: UserIdentity,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session for `user` at the current clock time.
    #[must_use]
    pub fn start(user: UserIdentity, clock: &impl Clock) -> Self {
        Self {
            user,
            started_at: clock.utc(),
        }
    }

    /// Returns the signed-in user.
    #[must_use]
    pub const fn user(&self) -> &UserIdentity {
        &self.user
    }

    /// Returns the owner identity used to scope task access.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        self.user.user_id()
    }

    /// Returns when the session started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
