//! taskpad API server library.
//!
//! Exposes the building blocks (config, state, error handling, services,
//! routes, router) so integration tests and the binary entrypoint share the
//! exact same router construction.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
