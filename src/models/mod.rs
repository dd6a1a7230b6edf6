//! Data model for request descriptions

pub mod types;

pub use types::{Certificate, Imports, Metadata, Request, RequestDescription, Server};
