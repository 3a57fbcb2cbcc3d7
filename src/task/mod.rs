//! Personal task list for Taskdeck.
//!
//! Tasks live in the document store, one document per task, scoped to their
//! owner. The view-model keeps the owner's latest live snapshot in memory,
//! derives the sorted, filtered and partitioned view shown on screen, and
//! forwards add, toggle and delete requests to the store without updating
//! local state optimistically.
//!
//! - Domain types and view derivation in [`domain`]
//! - Document mapping in [`adapters`]
//! - The view-model in [`services`]

pub mod adapters;
pub mod domain;
pub mod services;
