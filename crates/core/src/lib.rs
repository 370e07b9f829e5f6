//! Domain types, validation, and error taxonomy for the melodex catalogue.
//!
//! This crate is pure logic: no database, no network. The database layer
//! (`melodex-db`), the external provider client (`melodex-acrcloud`), and
//! the HTTP surface (`melodex-api`) all build on the types defined here.

pub mod error;
pub mod source;
pub mod track;
pub mod types;
pub mod validation;
