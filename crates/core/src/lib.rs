//! Domain logic for the taskpad API.
//!
//! Pure types and checks shared by the persistence and HTTP crates: field
//! contracts for submitted records, snapshot-based uniqueness and
//! referential-integrity checks, and the domain error taxonomy. Nothing in
//! this crate touches the database.

pub mod consistency;
pub mod contract;
pub mod error;
pub mod types;
