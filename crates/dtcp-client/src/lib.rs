//! # DTCP Node Client
//!
//! Validated submission client for a DTCP ledger node.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): data model and pure precondition checks
//! - **Ports Layer** (`ports/`): the `Transport` boundary trait
//! - **Service Layer** (`service.rs`): wires validation to the transport
//!
//! ## Fail-Fast Contract
//!
//! Every operation validates its request locally and raises
//! `ValidationError`/`EncodingError` before the transport is invoked. The
//! transport itself is a black box behind `ports::outbound::Transport`;
//! implement it with whatever HTTP stack the application already uses.
//!
//! Cryptographic identity (keys, signatures, Keccak-256) lives in the
//! companion `dtcp-crypto` crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::errors::{ClientError, TransportError, ValidationError};
pub use domain::model::{
    BlockHashCheckReq, BlockHashCheckResp, BlockHashQueryResp, LatestBlockHash, License,
    LicenseQueryResp, Metadata, MetadataQueryResp, MetadataSaveData, MetadataSaveResp,
    NodeResponse, RegisterAccountReq, RegisterAccountResp,
};
pub use domain::requests::{HttpMethod, PreparedRequest, DEFAULT_VERSION};
pub use ports::outbound::Transport;
pub use service::NodeClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
