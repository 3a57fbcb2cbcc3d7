//! User identity and session handling for Taskdeck.
//!
//! Authentication is delegated to an external identity provider that turns
//! email/password credentials into a stable user identity. The application
//! never inspects credentials itself; it only keeps an explicit [`Session`]
//! value for the signed-in user, created on successful sign-in or sign-up
//! and given up on sign-out.
//!
//! - Domain types in [`domain`]
//! - The provider contract in [`ports`]
//! - An in-process provider in [`adapters`]
//! - Session orchestration in [`services`]
//!
//! [`Session`]: domain::Session

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
