//! Registration screen controller.

use super::{Alert, Navigation};
use crate::identity::{domain::Credentials, ports::IdentityProvider, services::SessionService};
use mockable::Clock;
use tracing::warn;

/// Account creation form.
///
/// Inputs go to the provider unchanged; the provider owns validation.
pub struct RegisterScreen<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    sessions: SessionService<P, C>,
    email: String,
    password: String,
    alert: Option<Alert>,
}

impl<P, C> RegisterScreen<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates an empty registration form.
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

    /// Returns the pending alert, if any.
    #[must_use]
    pub const fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Dismisses and returns the pending alert.
    pub const fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    /// Creates the account and signs it in.
    ///
    /// Success raises a confirmation alert and moves to the task list.
    pub async fn submit(&mut self) -> Navigation {
        let credentials = Credentials::new(self.email.as_str(), self.password.as_str());
        match self.sessions.sign_up(&credentials).await {
            Ok(session) => {
                self.alert = Some(Alert::new("Success", "Account created successfully!"));
                Navigation::Home(session)
            }
            Err(err) => {
                warn!(error = %err, "registration rejected");
                self.alert = Some(Alert::new("Registration Error", err.to_string()));
                Navigation::Stay
            }
        }
    }

    /// Switches to the login screen.
    #[must_use]
    pub const fn go_to_login(&self) -> Navigation {
        Navigation::Login
    }
}
