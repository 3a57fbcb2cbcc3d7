//! Screen controllers for Taskdeck.
//!
//! Each controller owns the input state of one screen, forwards the user's
//! intents to the identity and task services, and reports where the user
//! goes next as a [`Navigation`]. Drawing is left to the caller.

mod home;
mod login;
mod register;

pub use home::{AddTaskForm, HomeScreen};
pub use login::LoginScreen;
pub use register::RegisterScreen;

use crate::identity::domain::Session;

/// Modal message raised by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    title: String,
    message: String,
}

impl Alert {
    /// Creates an alert.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Returns the alert title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the alert body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a screen intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Remain on the current screen.
    Stay,
    /// Show the login screen.
    Login,
    /// Show the registration screen.
    Register,
    /// Show the task list for the signed-in session.
    Home(Session),
}
