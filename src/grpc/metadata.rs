//! Metadata input parsing
//!
//! Metadata is entered either as a JSON object (`{"authorization": "Bearer x"}`)
//! or as curl-style `Name: Value` header strings. Every input path checks
//! that binary (`-bin`) headers carry base64, which grpcurl decodes itself.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;
use serde_json::Value as JsonValue;

use crate::errors::{GrpcopyError, Result};
use crate::models::Metadata;

/// How parsed entries combine with ones already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Existing entries win
    #[default]
    Preserve,
    /// Parsed entries overwrite existing ones
    Replace,
}

impl Metadata {
    /// Merge metadata from a JSON object.
    ///
    /// Empty input is accepted and adds nothing. Nothing is merged if any
    /// entry is invalid.
    pub fn parse_json(&mut self, input: &str, strategy: MergeStrategy) -> Result<()> {
        if input.trim().is_empty() {
            return Ok(());
        }

        let value: JsonValue = serde_json::from_str(input)?;
        let object = value
            .as_object()
            .ok_or_else(|| GrpcopyError::Metadata("Metadata input must be an object.".to_string()))?;

        let mut parsed = Metadata::new();
        for (key, value) in object {
            let value = value
                .as_str()
                .ok_or_else(|| GrpcopyError::Metadata(format!("Metadata '{}' must be a string.", key)))?;
            check_binary_value(key, value)?;
            parsed.insert(key.as_str(), value);
        }

        self.merge(&parsed, strategy);
        Ok(())
    }

    /// Merge another set of entries into this one
    pub fn merge(&mut self, other: &Metadata, strategy: MergeStrategy) {
        for (key, value) in other.iter() {
            match strategy {
                MergeStrategy::Preserve => self.insert_if_absent(key, value),
                MergeStrategy::Replace => self.insert(key, value),
            }
        }
    }

    /// Check entries that were built without going through the parsers
    pub fn validate(&self) -> Result<()> {
        self.iter().try_for_each(|(key, value)| check_binary_value(key, value))
    }

    /// Build metadata from `Name: Value` header strings. Later duplicates win.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let mut metadata = Metadata::new();
        for header in headers {
            let (name, value) = parse_header(header.as_ref())?;
            metadata.insert(name, value);
        }
        Ok(metadata)
    }
}

/// Split a `Name: Value` header at the first colon
pub fn parse_header(header: &str) -> Result<(String, String)> {
    let (name, value) = header
        .split_once(':')
        .ok_or_else(|| GrpcopyError::Argument(format!("header must be 'Name: Value', got '{}'", header)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(GrpcopyError::Argument(format!("header name is empty in '{}'", header)));
    }
    let value = value.trim();
    check_binary_value(name, value)?;
    Ok((name.to_string(), value.to_string()))
}

/// Values of `-bin` headers must be base64, padded or not
pub fn check_binary_value(key: &str, value: &str) -> Result<()> {
    if key.ends_with("-bin") && STANDARD.decode(value).is_err() && STANDARD_NO_PAD.decode(value).is_err() {
        return Err(GrpcopyError::Metadata(format!(
            "Metadata '{}' must be base64 encoded.",
            key
        )));
    }
    Ok(())
}
