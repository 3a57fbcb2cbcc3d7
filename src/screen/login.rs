//! Login screen controller.

use super::{Alert, Navigation};
use crate::identity::{domain::Credentials, ports::IdentityProvider, services::SessionService};
use mockable::Clock;
use tracing::warn;

const MISSING_INPUT: &str = "Please enter both email and password.";

/// Email/password sign-in form.
pub struct LoginScreen<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    sessions: SessionService<P, C>,
    email: String,
    password: String,
    alert: Option<Alert>,
}

impl<P, C> LoginScreen<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates an empty login form.
    #[must_use]
    pub const fn new(sessions: SessionService<P, C>) -> Self {
        Self {
            sessions,
            email: String::new(),
            password: String::new(),
            alert: None,
        }
    }

    /// Replaces the email input.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replaces the password input.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Returns the email input as typed.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the pending alert, if any.
    #[must_use]
    pub const fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Dismisses and returns the pending alert.
    pub const fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    /// Signs in with the current inputs.
    ///
    /// Blank inputs raise an alert without contacting the provider. The
    /// email is trimmed; the password is sent as typed. Provider failures
    /// raise an alert carrying the provider's message.
    pub async fn submit(&mut self) -> Navigation {
        let email = self.email.trim();
        if email.is_empty() || self.password.trim().is_empty() {
            self.alert = Some(Alert::new("Error", MISSING_INPUT));
            return Navigation::Stay;
        }

        let credentials = Credentials::new(email, self.password.as_str());
        match self.sessions.sign_in(&credentials).await {
            Ok(session) => Navigation::Home(session),
            Err(err) => {
                warn!(error = %err, "sign-in rejected");
                self.alert = Some(Alert::new("Login Error", err.to_string()));
                Navigation::Stay
            }
        }
    }

    /// Switches to the registration screen.
    #[must_use]
    pub const fn go_to_register(&self) -> Navigation {
        Navigation::Register
    }
}
