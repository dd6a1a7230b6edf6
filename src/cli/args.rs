//! CLI argument definitions using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// grpcopy - print the grpcurl command equivalent to a gRPC request
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "grpcopy", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // REQUEST DESCRIPTION
    // =========================================================================

    /// JSON document with `request`, `server` and `imports` ("-" reads stdin)
    #[arg(long = "describe", value_name = "FILE")]
    pub describe: Option<PathBuf>,

    // =========================================================================
    // REQUEST
    // =========================================================================

    /// Request body as JSON
    #[arg(short = 'd', long = "data", value_name = "JSON", conflicts_with = "data_file")]
    pub data: Option<String>,

    /// Read the request body from a JSON file
    #[arg(long = "data-file", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Metadata entry, "Name: Value" (repeatable)
    #[arg(short = 'H', long = "header", value_name = "HEADER", action = ArgAction::Append)]
    pub headers: Vec<String>,

    /// Metadata as a JSON object of string values
    #[arg(long = "metadata", value_name = "JSON")]
    pub metadata: Option<String>,

    /// Path to the .proto file defining the method
    #[arg(long = "proto", value_name = "FILE")]
    pub proto: Option<String>,

    /// Directory searched for proto imports (repeatable)
    #[arg(long = "import-path", value_name = "DIR", action = ArgAction::Append)]
    pub import_paths: Vec<String>,

    /// RPC path, e.g. /package.Service/Method
    #[arg(long = "method", value_name = "PATH", conflicts_with_all = ["service", "rpc"])]
    pub method: Option<String>,

    /// Fully qualified service name (use with --rpc)
    #[arg(long = "service", value_name = "NAME", requires = "rpc")]
    pub service: Option<String>,

    /// Method name within --service
    #[arg(long = "rpc", value_name = "NAME", requires = "service")]
    pub rpc: Option<String>,

    // =========================================================================
    // SERVER
    // =========================================================================

    /// Server address, host:port
    #[arg(long = "address", value_name = "HOST:PORT")]
    pub address: Option<String>,

    /// Named server profile from the config file
    #[arg(long = "server", value_name = "NAME")]
    pub server: Option<String>,

    /// Do not send the server profile's shared metadata
    #[arg(long = "no-shared-metadata", action = ArgAction::SetTrue, requires = "server")]
    pub no_shared_metadata: bool,

    /// Connect with TLS
    #[arg(long = "tls", action = ArgAction::SetTrue, conflicts_with = "plaintext")]
    pub tls: bool,

    /// Connect without TLS
    #[arg(long = "plaintext", action = ArgAction::SetTrue)]
    pub plaintext: bool,

    /// Root CA certificate file (TLS only)
    #[arg(long = "cacert", value_name = "FILE")]
    pub cacert: Option<String>,

    /// Client private key file (TLS only)
    #[arg(long = "key", value_name = "FILE")]
    pub key: Option<String>,

    /// Client certificate chain file (TLS only)
    #[arg(long = "cert", value_name = "FILE")]
    pub cert: Option<String>,

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Escape single quotes inside the JSON body for POSIX shells
    #[arg(long = "escape-body", action = ArgAction::SetTrue)]
    pub escape_body: bool,

    /// Always highlight the command
    #[arg(long = "pretty", action = ArgAction::SetTrue, conflicts_with = "no_pretty")]
    pub pretty: bool,

    /// Never highlight the command
    #[arg(long = "no-pretty", action = ArgAction::SetTrue)]
    pub no_pretty: bool,

    /// Debug logging to stderr
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}
