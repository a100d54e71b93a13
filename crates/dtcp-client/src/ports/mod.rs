//! # Ports Layer
//!
//! Trait boundaries between the client and its collaborators.

pub mod outbound;
