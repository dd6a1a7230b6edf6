//! grpcopy library interface
//!
//! Turns a gRPC request description into the equivalent `grpcurl` command
//! line.
//!
//! ```
//! use grpcopy::devexp::generate_grpcurl_command;
//! use grpcopy::models::{Request, Server};
//!
//! let request = Request {
//!     body: serde_json::json!({"name": "world"}),
//!     proto_file: "/protos/greet.proto".to_string(),
//!     path: "/greet.Greeter/SayHello".to_string(),
//!     ..Default::default()
//! };
//! let server = Server {
//!     address: "localhost:50051".to_string(),
//!     ..Default::default()
//! };
//!
//! assert_eq!(
//!     generate_grpcurl_command(&request, &server, &[]),
//!     r#"grpcurl -d '{"name":"world"}' -import-path "/protos" -proto "/protos/greet.proto" -plaintext localhost:50051 greet.Greeter/SayHello"#,
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`devexp`] - Command generation (CommandBuilder, format_grpcurl_pretty)
//! - [`models`] - Request, Server, Certificate, Metadata
//! - [`grpc`] - Method paths and metadata parsing
//! - [`errors`] - Error types (GrpcopyError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - CLI execution logic

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod devexp;
pub mod errors;
pub mod grpc;
pub mod logging;
pub mod models;
pub mod status;
