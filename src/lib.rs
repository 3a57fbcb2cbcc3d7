//! Taskdeck: a personal task list backed by a managed identity provider and
//! a document store with live queries.
//!
//! Users sign in or register with email and password. Each user sees only
//! their own tasks, pushed as live snapshots from the store, sorted by
//! priority then deadline, filtered by a search string and split into
//! incomplete and completed sections.
//!
//! The crate is organised into bounded contexts:
//!
//! - **Identity**: credentials, sessions and the identity provider port
//! - **Store**: documents, live queries and the document store port
//! - **Task**: task values, document mapping and the task list view-model
//! - **Screen**: login, registration and task list controllers
//!
//! Each context follows a hexagonal layout with `domain`, `ports`,
//! `adapters` and `services` where it needs them. [`config`] loads backend
//! settings and [`telemetry`] installs log output.

pub mod config;
pub mod identity;
pub mod screen;
pub mod store;
pub mod task;
pub mod telemetry;

#[cfg(test)]
mod test_support;
