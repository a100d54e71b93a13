//! # Request Validation
//!
//! Stateless precondition checks for every remote operation.
//!
//! Each builder is a pure function over its inputs: it either fails fast
//! with a `ValidationError` or emits a fully-formed `PreparedRequest`
//! (method, path, serialized payload) for the transport collaborator. No
//! I/O happens here, so a rejected request can never be partially sent.

use super::errors::ValidationError;
use super::model::{BlockHashCheckReq, Metadata, RegisterAccountReq};
use dtcp_crypto::is_valid_public_key;
use serde::Serialize;

/// Version segment used when the caller leaves it blank.
pub const DEFAULT_VERSION: &str = "v1";

/// HTTP method of a prepared request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read-only lookup
    Get,
    /// Submission with a JSON body
    Post,
}

/// A validated, ready-to-send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Fully-formed URL (`{base}/{version}/{resource}[/{param}]`)
    pub url: String,
    /// Already-serialized JSON payload, present for POST operations
    pub body: Option<String>,
}

impl PreparedRequest {
    fn get(url: String) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            body: None,
        }
    }

    fn post<T: Serialize>(url: String, payload: &T) -> Result<Self, ValidationError> {
        let body = serde_json::to_string(payload)
            .map_err(|_| ValidationError::UnserializablePayload)?;
        Ok(Self {
            method: HttpMethod::Post,
            url,
            body: Some(body),
        })
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn version_or_default(version: &str) -> &str {
    if is_blank(version) {
        DEFAULT_VERSION
    } else {
        version
    }
}

/// Look up a metadata record by DNA.
pub fn query_metadata(
    url: &str,
    version: &str,
    dna: &str,
) -> Result<PreparedRequest, ValidationError> {
    if is_blank(url) {
        return Err(ValidationError::EmptyNodeAddress);
    }
    if is_blank(dna) {
        return Err(ValidationError::EmptyDna);
    }
    let v = version_or_default(version);
    Ok(PreparedRequest::get(format!("{url}/{v}/metadata/{dna}")))
}

/// Register a signed metadata record.
///
/// The record must already carry its signature and a complete license; a
/// record failing any of these checks never reaches the transport.
pub fn save_metadata(
    url: &str,
    version: &str,
    metadata: &Metadata,
) -> Result<PreparedRequest, ValidationError> {
    if is_blank(url) {
        return Err(ValidationError::EmptyNodeAddress);
    }
    if is_blank(&metadata.signature) {
        return Err(ValidationError::EmptySignature);
    }
    let license = metadata
        .license
        .as_ref()
        .ok_or(ValidationError::MissingLicense)?;
    if is_blank(&license.license_type) {
        return Err(ValidationError::EmptyLicenseType);
    }
    if license.parameters.is_empty() {
        return Err(ValidationError::EmptyLicenseParameters);
    }
    let v = version_or_default(version);
    PreparedRequest::post(format!("{url}/{v}/metadata"), metadata)
}

/// Look up a license definition by type.
pub fn query_license(
    url: &str,
    version: &str,
    license_type: &str,
) -> Result<PreparedRequest, ValidationError> {
    if is_blank(url) {
        return Err(ValidationError::EmptyNodeAddress);
    }
    if is_blank(license_type) {
        return Err(ValidationError::EmptyLicenseType);
    }
    let v = version_or_default(version);
    Ok(PreparedRequest::get(format!(
        "{url}/{v}/license/{license_type}"
    )))
}

/// Query the hash and height of the newest block.
pub fn query_latest_block_hash(
    url: &str,
    version: &str,
) -> Result<PreparedRequest, ValidationError> {
    if is_blank(url) {
        return Err(ValidationError::EmptyNodeAddress);
    }
    let v = version_or_default(version);
    Ok(PreparedRequest::get(format!("{url}/{v}/block_hash/")))
}

/// Check whether a block hash is on-chain at the given height.
pub fn check_block_hash(
    url: &str,
    version: &str,
    req: Option<&BlockHashCheckReq>,
) -> Result<PreparedRequest, ValidationError> {
    if is_blank(url) {
        return Err(ValidationError::EmptyNodeAddress);
    }
    let req = req.ok_or(ValidationError::MissingRequestBody)?;
    let v = version_or_default(version);
    PreparedRequest::post(format!("{url}/{v}/check_block_hash/"), req)
}

/// Register an account public key with its sub keys.
///
/// The main key must be a valid compressed point and at least one sub key
/// must be present.
pub fn register_account(
    url: &str,
    version: &str,
    req: &RegisterAccountReq,
) -> Result<PreparedRequest, ValidationError> {
    if is_blank(url) {
        return Err(ValidationError::EmptyNodeAddress);
    }
    if !is_valid_public_key(&req.pub_key, true) {
        return Err(ValidationError::InvalidPublicKey);
    }
    if req.signature.is_empty() {
        return Err(ValidationError::EmptySignature);
    }
    if req.sub_pub_keys.is_empty() {
        return Err(ValidationError::NoSubPublicKeys);
    }
    let v = version_or_default(version);
    PreparedRequest::post(format!("{url}/{v}/accounts/"), req)
}
