//! Port contracts for user authentication.

mod provider;

pub use provider::{AuthError, AuthResult, IdentityProvider};

#[cfg(test)]
pub use provider::MockIdentityProvider;
