//! # Node Client Service
//!
//! Wires the request validator to the transport port.
//!
//! Every operation follows the same fail-fast shape: validate locally,
//! then send, then decode the `{code, msg, data}` envelope. Validation and
//! encoding errors are raised before the transport is ever invoked, so no
//! partially-sent request can exist.

use crate::domain::model::{
    BlockHashCheckReq, BlockHashCheckResp, BlockHashQueryResp, LicenseQueryResp, Metadata,
    MetadataQueryResp, MetadataSaveResp, RegisterAccountReq, RegisterAccountResp,
};
use crate::domain::errors::ClientError;
use crate::domain::requests::{self, PreparedRequest};
use crate::ports::outbound::Transport;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Client for a single DTCP ledger node.
///
/// Stateless apart from the transport it holds; safe to share across
/// threads.
pub struct NodeClient<T: Transport> {
    transport: T,
}

impl<T: Transport> NodeClient<T> {
    /// Create a client over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Look up a metadata record by DNA.
    pub fn query_metadata(
        &self,
        url: &str,
        version: &str,
        dna: &str,
    ) -> Result<MetadataQueryResp, ClientError> {
        let prepared = requests::query_metadata(url, version, dna)?;
        self.dispatch(prepared)
    }

    /// Register a signed metadata record.
    pub fn save_metadata(
        &self,
        url: &str,
        version: &str,
        metadata: &Metadata,
    ) -> Result<MetadataSaveResp, ClientError> {
        let prepared = requests::save_metadata(url, version, metadata)?;
        self.dispatch(prepared)
    }

    /// Look up a license definition by type.
    pub fn query_license(
        &self,
        url: &str,
        version: &str,
        license_type: &str,
    ) -> Result<LicenseQueryResp, ClientError> {
        let prepared = requests::query_license(url, version, license_type)?;
        self.dispatch(prepared)
    }

    /// Query the hash and height of the newest block.
    pub fn query_latest_block_hash(
        &self,
        url: &str,
        version: &str,
    ) -> Result<BlockHashQueryResp, ClientError> {
        let prepared = requests::query_latest_block_hash(url, version)?;
        self.dispatch(prepared)
    }

    /// Check whether a block hash is on-chain at the given height.
    pub fn check_block_hash(
        &self,
        url: &str,
        version: &str,
        req: Option<&BlockHashCheckReq>,
    ) -> Result<BlockHashCheckResp, ClientError> {
        let prepared = requests::check_block_hash(url, version, req)?;
        self.dispatch(prepared)
    }

    /// Register an account public key with its sub keys.
    pub fn register_account(
        &self,
        url: &str,
        version: &str,
        req: &RegisterAccountReq,
    ) -> Result<RegisterAccountResp, ClientError> {
        let prepared = requests::register_account(url, version, req)?;
        self.dispatch(prepared)
    }

    fn dispatch<R: DeserializeOwned>(&self, prepared: PreparedRequest) -> Result<R, ClientError> {
        debug!(method = ?prepared.method, url = %prepared.url, "sending node request");
        let body = self
            .transport
            .send(prepared.method, &prepared.url, prepared.body.as_deref())?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{TransportError, ValidationError};
    use crate::domain::model::License;
    use crate::domain::requests::HttpMethod;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    const NODE: &str = "http://localhost:9000";
    const PUBLIC_KEY: &str = "03d75b59a801f6db4bbb501ff8b88743902aa83a3e54237edcd532716fd27dea77";

    /// Transport double that records every invocation and replays a canned
    /// response, so fail-fast tests can assert zero calls.
    struct MockTransport {
        calls: Mutex<Vec<(HttpMethod, String, Option<String>)>>,
        response: Result<String, TransportError>,
    }

    impl MockTransport {
        fn returning(body: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response: Ok(body.to_string()),
            }
        }

        fn failing(err: TransportError) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response: Err(err),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl Transport for MockTransport {
        fn send(
            &self,
            method: HttpMethod,
            url: &str,
            body: Option<&str>,
        ) -> Result<String, TransportError> {
            self.calls.lock().unwrap().push((
                method,
                url.to_string(),
                body.map(str::to_string),
            ));
            self.response.clone()
        }
    }

    fn signed_metadata() -> Metadata {
        Metadata {
            dna: "a1b2".into(),
            signature: "ff".repeat(65),
            license: Some(License {
                license_type: "cc".into(),
                parameters: BTreeMap::from([("ADAPT".into(), "y".into())]),
            }),
            ..Metadata::default()
        }
    }

    #[test]
    fn test_save_metadata_success_hits_transport_once() {
        let client = NodeClient::new(MockTransport::returning(
            r#"{"code":"200","msg":"ok","data":{"dna":"a1b2"}}"#,
        ));
        let resp = client.save_metadata(NODE, "v1", &signed_metadata()).unwrap();

        assert_eq!(resp.data.unwrap().dna, "a1b2");
        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (method, url, body) = &calls[0];
        assert_eq!(*method, HttpMethod::Post);
        assert_eq!(url, "http://localhost:9000/v1/metadata");
        assert!(body.as_ref().unwrap().contains(r#""signature""#));
    }

    #[test]
    fn test_save_metadata_fail_fast_never_touches_transport() {
        let client = NodeClient::new(MockTransport::returning("{}"));

        let mut blank_signature = signed_metadata();
        blank_signature.signature.clear();
        let mut no_license = signed_metadata();
        no_license.license = None;
        let mut blank_type = signed_metadata();
        blank_type.license.as_mut().unwrap().license_type.clear();
        let mut no_params = signed_metadata();
        no_params.license.as_mut().unwrap().parameters.clear();

        for (md, expected) in [
            (&blank_signature, ValidationError::EmptySignature),
            (&no_license, ValidationError::MissingLicense),
            (&blank_type, ValidationError::EmptyLicenseType),
            (&no_params, ValidationError::EmptyLicenseParameters),
        ] {
            let err = client.save_metadata(NODE, "v1", md).unwrap_err();
            assert!(matches!(err, ClientError::Validation(e) if e == expected));
        }
        assert_eq!(client.transport.call_count(), 0);
    }

    #[test]
    fn test_query_metadata_defaults_version() {
        let client = NodeClient::new(MockTransport::returning(
            r#"{"code":"200","msg":"ok","data":{"dna":"a1b2"}}"#,
        ));
        let resp = client.query_metadata(NODE, "", "a1b2").unwrap();
        assert_eq!(resp.data.unwrap().dna, "a1b2");

        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(calls[0].1, "http://localhost:9000/v1/metadata/a1b2");
    }

    #[test]
    fn test_register_account_validation_blocks_transport() {
        let client = NodeClient::new(MockTransport::returning("{}"));
        let req = RegisterAccountReq {
            pub_key: "deadbeef".into(),
            sub_pub_keys: vec![PUBLIC_KEY.into()],
            signature: "ab".repeat(65),
        };

        let err = client.register_account(NODE, "v1", &req).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Validation(ValidationError::InvalidPublicKey)
        ));
        assert_eq!(client.transport.call_count(), 0);
    }

    #[test]
    fn test_register_account_success() {
        let client = NodeClient::new(MockTransport::returning(
            r#"{"code":"200","msg":"ok"}"#,
        ));
        let req = RegisterAccountReq {
            pub_key: PUBLIC_KEY.into(),
            sub_pub_keys: vec![PUBLIC_KEY.into()],
            signature: "ab".repeat(65),
        };
        let resp = client.register_account(NODE, "", &req).unwrap();
        assert_eq!(resp.code, "200");

        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(calls[0].1, "http://localhost:9000/v1/accounts/");
    }

    #[test]
    fn test_transport_error_propagates() {
        let client = NodeClient::new(MockTransport::failing(TransportError::Status {
            status: 503,
            body: "unavailable".into(),
        }));

        let err = client.query_latest_block_hash(NODE, "v1").unwrap_err();
        assert!(matches!(
            err,
            ClientError::Transport(TransportError::Status { status: 503, .. })
        ));
        assert_eq!(client.transport.call_count(), 1);
    }

    #[test]
    fn test_malformed_response_is_decode_error() {
        let client = NodeClient::new(MockTransport::returning("not json"));
        let err = client.query_latest_block_hash(NODE, "v1").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_check_block_hash_roundtrip() {
        let client = NodeClient::new(MockTransport::returning(
            r#"{"code":"200","msg":"ok","data":{"status":true}}"#,
        ));
        let body = BlockHashCheckReq {
            block_hash: "54ce".into(),
            block_height: 7,
        };
        let resp = client.check_block_hash(NODE, "", Some(&body)).unwrap();
        assert_eq!(resp.data.unwrap()["status"], true);

        let err = client.check_block_hash(NODE, "", None).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Validation(ValidationError::MissingRequestBody)
        ));
        assert_eq!(client.transport.call_count(), 1);
    }
}
