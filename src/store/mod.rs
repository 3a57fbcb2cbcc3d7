//! Document store access for Taskdeck.
//!
//! The document store is an external managed database offering per-record
//! create, update and delete plus a push-based live query. This module
//! models that collaborator the same way the other contexts are laid out:
//!
//! - Document, filter and snapshot values in [`domain`]
//! - The store contract and live query handle in [`ports`]
//! - An in-process implementation in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
