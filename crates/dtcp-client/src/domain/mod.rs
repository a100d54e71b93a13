//! # Domain Layer
//!
//! Pure request validation and data model, no I/O.

pub mod errors;
pub mod model;
pub mod requests;
