//! # Domain Model
//!
//! Request and response records exchanged with the ledger node.
//!
//! Wire format is JSON with snake_case keys; responses share the
//! `{code, msg, data}` envelope. A metadata record is signed once and never
//! mutated afterwards - any mutation invalidates its signature.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;

/// Usage license attached to a metadata record.
///
/// Both the type and the parameter mapping must be non-empty for a
/// submission to pass validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License type identifier (e.g. "cc", "none")
    #[serde(rename = "type")]
    pub license_type: String,
    /// License parameters (non-empty mapping)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
}

/// A metadata record registered on the ledger.
///
/// `dna` is the content-derived digest identifier assigned by the ledger;
/// `signature` is the owner's recoverable signature in 130-char hex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Content-derived digest identifier
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dna: String,
    /// Keccak-256 digest of the content, lowercase hex
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_hash: String,
    /// Owner's compressed public key, lowercase hex
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public_key: String,
    /// Recoverable signature over the record, lowercase hex
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub signature: String,
    /// Usage license; required for registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// Creation timestamp as reported by the caller
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    /// DNA of the parent record, for derived content
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_dna: String,
    /// Hash of the block the record landed in (set by the node)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub block_hash: String,
    /// Height of the block the record landed in (set by the node)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
    /// Free-form extension fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// Request body for a block-hash membership check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHashCheckReq {
    /// Block hash to look up, lowercase hex
    pub block_hash: String,
    /// Expected height of that block
    pub block_height: u64,
}

/// Request body for account registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAccountReq {
    /// Account public key (compressed, 66 hex chars)
    pub pub_key: String,
    /// Sub public keys authorized to sign on behalf of the account
    pub sub_pub_keys: Vec<String>,
    /// Recoverable signature proving key ownership
    pub signature: String,
}

/// Common `{code, msg, data}` response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeResponse<T> {
    /// Node status code ("200" on success)
    pub code: String,
    /// Human-readable status message
    #[serde(default)]
    pub msg: String,
    /// Operation payload, absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: DeserializeOwned> NodeResponse<T> {
    /// Decode an envelope from a raw response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Payload of a successful metadata registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSaveData {
    /// DNA assigned to the registered record
    pub dna: String,
}

/// Payload describing the chain tip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestBlockHash {
    /// Height of the newest block
    pub latest_block_height: u64,
    /// Hash of the newest block, lowercase hex
    pub latest_block_hash: String,
    /// Node-reported timestamp of the newest block
    #[serde(default)]
    pub latest_block_time: String,
}

/// Metadata lookup response.
pub type MetadataQueryResp = NodeResponse<Metadata>;
/// Metadata registration response.
pub type MetadataSaveResp = NodeResponse<MetadataSaveData>;
/// License lookup response.
pub type LicenseQueryResp = NodeResponse<License>;
/// Chain-tip lookup response.
pub type BlockHashQueryResp = NodeResponse<LatestBlockHash>;
/// Block-hash membership check response; payload shape is node-defined.
pub type BlockHashCheckResp = NodeResponse<serde_json::Value>;
/// Account registration response; payload shape is node-defined.
pub type RegisterAccountResp = NodeResponse<serde_json::Value>;
