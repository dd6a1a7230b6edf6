//! Core data types
//!
//! These mirror the shape of a request as the editor holds it: a request
//! body and its metadata, the proto file the method lives in, and the server
//! it is sent to. Everything here is plain data; command generation only
//! ever reads it.
//!
//! # Why IndexMap?
//!
//! Metadata is emitted as `-H` flags in the order the user entered it, so
//! the map must iterate in insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Ordered import directories searched for proto dependencies
pub type Imports = Vec<String>;

/// gRPC request metadata - header name to value, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(IndexMap<String, String>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Insert or overwrite an entry. An overwritten key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert only if the key is not present yet
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_insert_with(|| value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Metadata(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A fully specified gRPC request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Request {
    /// Request message as JSON
    pub body: JsonValue,
    pub metadata: Metadata,
    /// Path of the `.proto` file defining the method
    pub proto_file: String,
    /// RPC route, e.g. `/package.Service/Method`
    pub path: String,
}

/// TLS client material. Each field is a file path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certificate {
    pub root_certs: Option<String>,
    pub private_key: Option<String>,
    pub cert_chain: Option<String>,
}

impl Certificate {
    pub fn root_certs(&self) -> Option<&str> {
        non_empty(&self.root_certs)
    }

    pub fn private_key(&self) -> Option<&str> {
        non_empty(&self.private_key)
    }

    pub fn cert_chain(&self) -> Option<&str> {
        non_empty(&self.cert_chain)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Target server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    /// `host:port`
    pub address: String,
    #[serde(rename = "useTLS")]
    pub use_tls: bool,
    pub certificate: Certificate,
}

/// Everything needed to generate one command, as a single JSON document
///
/// ```json
/// {
///   "request": { "body": {}, "metadata": {}, "protoFile": "/p/a.proto", "path": "/pkg.Svc/Call" },
///   "server": { "address": "localhost:50051", "useTLS": false },
///   "imports": []
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDescription {
    pub request: Request,
    pub server: Server,
    pub imports: Imports,
}

impl RequestDescription {
    pub fn from_json(input: &str) -> crate::errors::Result<Self> {
        let description: Self = serde_json::from_str(input)?;
        description.request.metadata.validate()?;
        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_preserves_insertion_order() {
        let mut md = Metadata::new();
        md.insert("z-last", "1");
        md.insert("a-first", "2");
        md.insert("m-middle", "3");
        let keys: Vec<&str> = md.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z-last", "a-first", "m-middle"]);
    }

    #[test]
    fn test_metadata_overwrite_keeps_position() {
        let mut md: Metadata = [("a", "1"), ("b", "2")].into_iter().collect();
        md.insert("a", "3");
        let entries: Vec<(&str, &str)> = md.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_insert_if_absent() {
        let mut md = Metadata::new();
        md.insert("a", "1");
        md.insert_if_absent("a", "2");
        md.insert_if_absent("b", "3");
        assert_eq!(md.get("a"), Some("1"));
        assert_eq!(md.get("b"), Some("3"));
    }

    #[test]
    fn test_certificate_empty_is_absent() {
        let cert = Certificate {
            root_certs: Some(String::new()),
            private_key: Some("/k.pem".to_string()),
            cert_chain: None,
        };
        assert_eq!(cert.root_certs(), None);
        assert_eq!(cert.private_key(), Some("/k.pem"));
        assert_eq!(cert.cert_chain(), None);
    }

    #[test]
    fn test_description_field_names() {
        let desc = RequestDescription::from_json(
            r#"{
                "request": {
                    "body": {"name": "x"},
                    "metadata": {"authorization": "Bearer t"},
                    "protoFile": "/protos/greet.proto",
                    "path": "/greet.Greeter/SayHello"
                },
                "server": {
                    "address": "localhost:50051",
                    "useTLS": true,
                    "certificate": {"rootCerts": "/ca.pem"}
                },
                "imports": ["/protos"]
            }"#,
        )
        .unwrap();

        assert_eq!(desc.request.body, json!({"name": "x"}));
        assert_eq!(desc.request.metadata.get("authorization"), Some("Bearer t"));
        assert_eq!(desc.request.proto_file, "/protos/greet.proto");
        assert_eq!(desc.request.path, "/greet.Greeter/SayHello");
        assert!(desc.server.use_tls);
        assert_eq!(desc.server.certificate.root_certs(), Some("/ca.pem"));
        assert_eq!(desc.imports, vec!["/protos".to_string()]);
    }

    #[test]
    fn test_description_checks_binary_metadata() {
        let err = RequestDescription::from_json(
            r#"{"request": {"metadata": {"trace-bin": "%%%"}}}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Metadata 'trace-bin' must be base64 encoded.");
    }

    #[test]
    fn test_description_keeps_number_text() {
        let desc = RequestDescription::from_json(
            r#"{"request": {"body": {"n": 1e2, "big": 123456789012345678901234567890}}}"#,
        )
        .unwrap();
        assert_eq!(desc.request.body.to_string(), r#"{"n":1e2,"big":123456789012345678901234567890}"#);
    }

    #[test]
    fn test_description_missing_fields_default() {
        let desc = RequestDescription::from_json(r#"{"request": {"path": "/a.B/C"}}"#).unwrap();
        assert_eq!(desc.request.body, JsonValue::Null);
        assert!(desc.request.metadata.is_empty());
        assert_eq!(desc.server, Server::default());
        assert!(desc.imports.is_empty());
    }
}
