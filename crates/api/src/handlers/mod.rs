//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers parse path and body input, delegate to the matching service,
//! and map outcomes through [`crate::error::AppError`].

pub mod action;
pub mod project;
