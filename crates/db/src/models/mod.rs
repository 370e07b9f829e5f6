//! Entity model structs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, plus any safe external-facing representation. Creation and update
//! inputs come validated from `melodex-core` rather than living here.

pub mod track;
pub mod user;
