//! Post-processing argument logic
//!
//! Combines the parsed arguments with the config file into the request,
//! server and import list the command is generated from. Later sources win:
//! description file, then server profile, then explicit flags.

use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::cli::args::Args;
use crate::config::Config;
use crate::devexp::BodyQuoting;
use crate::errors::{GrpcopyError, Result};
use crate::grpc::{method_path, MergeStrategy};
use crate::models::{Imports, Metadata, Request, RequestDescription, Server};

/// Everything needed to generate and print one command
#[derive(Debug, Clone)]
pub struct ProcessedArgs {
    pub request: Request,
    pub server: Server,
    pub imports: Imports,
    pub body_quoting: BodyQuoting,
    /// Explicit colour choice; `None` defers to the terminal
    pub pretty: Option<bool>,
}

/// Process parsed arguments against the loaded config
pub fn process_args(args: &Args, config: &Config) -> Result<ProcessedArgs> {
    let description = match args.describe {
        Some(ref path) => load_description(path)?,
        None => RequestDescription::default(),
    };
    let RequestDescription {
        mut request,
        mut server,
        imports: described_imports,
    } = description;

    if let Some(ref name) = args.server {
        let profile = config.server(name)?;
        server = profile.to_server();
        debug!(server = %name, address = %server.address, "Using server profile");

        if !args.no_shared_metadata && !profile.metadata.is_empty() {
            debug!(server = %name, entries = profile.metadata.len(), "Applying shared metadata");
            let mut metadata = Metadata::new();
            metadata.merge(&profile.metadata, MergeStrategy::Preserve);
            metadata.merge(&request.metadata, MergeStrategy::Replace);
            request.metadata = metadata;
        }
    }
    apply_server_flags(args, &mut server);

    apply_request_flags(args, &mut request)?;

    let imports = if !args.import_paths.is_empty() {
        args.import_paths.clone()
    } else if !described_imports.is_empty() {
        described_imports
    } else {
        config.default_imports.clone()
    };

    if request.proto_file.is_empty() {
        warn!("No proto file given; the command will be incomplete");
    }
    if request.path.is_empty() {
        warn!("No method given; the command will be incomplete");
    }

    let body_quoting = if args.escape_body || config.escape_body {
        BodyQuoting::Escaped
    } else {
        BodyQuoting::Naive
    };

    let pretty = if args.pretty {
        Some(true)
    } else if args.no_pretty {
        Some(false)
    } else {
        config.pretty
    };

    Ok(ProcessedArgs {
        request,
        server,
        imports,
        body_quoting,
        pretty,
    })
}

fn apply_server_flags(args: &Args, server: &mut Server) {
    if let Some(ref address) = args.address {
        server.address = address.clone();
    }
    if args.tls {
        server.use_tls = true;
    } else if args.plaintext {
        server.use_tls = false;
    }

    let cert = &mut server.certificate;
    if let Some(ref path) = args.cacert {
        cert.root_certs = Some(path.clone());
    }
    if let Some(ref path) = args.key {
        cert.private_key = Some(path.clone());
    }
    if let Some(ref path) = args.cert {
        cert.cert_chain = Some(path.clone());
    }

    let has_certs = args.cacert.is_some() || args.key.is_some() || args.cert.is_some();
    if has_certs && !server.use_tls {
        warn!("Certificate flags are ignored without --tls");
    }
}

fn apply_request_flags(args: &Args, request: &mut Request) -> Result<()> {
    if let Some(ref data) = args.data {
        request.body = parse_body(data, "--data")?;
    } else if let Some(ref path) = args.data_file {
        let content = read_input(path)?;
        request.body = parse_body(&content, &path.display().to_string())?;
    }

    if let Some(ref json) = args.metadata {
        request.metadata.parse_json(json, MergeStrategy::Replace)?;
    }
    for (name, value) in Metadata::from_headers(&args.headers)?.iter() {
        request.metadata.insert(name, value);
    }

    if let Some(ref proto) = args.proto {
        request.proto_file = proto.clone();
    }

    if let Some(ref method) = args.method {
        request.path = method.clone();
    } else if let (Some(service), Some(rpc)) = (&args.service, &args.rpc) {
        request.path = method_path(service, rpc);
    }

    Ok(())
}

fn parse_body(input: &str, source: &str) -> Result<serde_json::Value> {
    serde_json::from_str(input)
        .map_err(|e| GrpcopyError::Argument(format!("request body from {} is not valid JSON: {}", source, e)))
}

/// Load a request description from a file, or stdin for `-`
pub fn load_description(path: &Path) -> Result<RequestDescription> {
    let content = read_input(path)?;
    debug!(source = %path.display(), bytes = content.len(), "Loaded request description");
    RequestDescription::from_json(&content)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    std::fs::read_to_string(path)
        .map_err(|e| GrpcopyError::Argument(format!("cannot read {}: {}", path.display(), e)))
}
