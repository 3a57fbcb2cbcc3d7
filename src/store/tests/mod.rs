//! Unit tests for the document store context.
