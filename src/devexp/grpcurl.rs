//! grpcurl command generation
//!
//! Converts a request description into an equivalent `grpcurl` invocation
//! for sharing and debugging outside the editor.

use crate::grpc::{import_dir_of, strip_leading_slash};
use crate::models::{Request, Server};

/// Program name the command line starts with
pub const PROGRAM: &str = "grpcurl";

const BOLD_YELLOW: &str = "\x1b[1;33m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// How the JSON body is wrapped in the `-d` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyQuoting {
    /// `'<json>'` as-is. A `'` inside the body ends the shell quote early.
    #[default]
    Naive,
    /// `'<json>'` with each embedded `'` written as `'"'"'`
    Escaped,
}

/// Builds grpcurl command lines
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandBuilder {
    body_quoting: BodyQuoting,
}

impl CommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_quoting(mut self, quoting: BodyQuoting) -> Self {
        self.body_quoting = quoting;
        self
    }

    /// Generate the command line.
    ///
    /// Flag groups always come in the same order: body, metadata, import
    /// paths, proto, TLS, address, method path. Inputs are not validated;
    /// missing values produce an incomplete command rather than an error.
    pub fn build(&self, request: &Request, server: &Server, imports: &[String]) -> String {
        let mut parts: Vec<String> = vec![PROGRAM.to_string()];

        // Body
        parts.push("-d".to_string());
        parts.push(self.quote_body(&request.body.to_string()));

        // Metadata
        for (key, value) in request.metadata.iter() {
            parts.push("-H".to_string());
            parts.push(format!("\"{}: {}\"", key, value));
        }

        // Import paths, falling back to the proto file's own directory
        if imports.is_empty() {
            parts.push("-import-path".to_string());
            parts.push(format!("\"{}\"", import_dir_of(&request.proto_file)));
        } else {
            for path in imports {
                parts.push("-import-path".to_string());
                parts.push(format!("\"{}\"", path));
            }
        }

        parts.push("-proto".to_string());
        parts.push(format!("\"{}\"", request.proto_file));

        // TLS
        if server.use_tls {
            let cert = &server.certificate;
            if let Some(root_certs) = cert.root_certs() {
                parts.push("-cacert".to_string());
                parts.push(root_certs.to_string());
            }
            if let Some(private_key) = cert.private_key() {
                parts.push("-key".to_string());
                parts.push(private_key.to_string());
            }
            if let Some(cert_chain) = cert.cert_chain() {
                parts.push("-cert".to_string());
                parts.push(cert_chain.to_string());
            }
        } else {
            parts.push("-plaintext".to_string());
        }

        parts.push(server.address.clone());
        parts.push(strip_leading_slash(&request.path).to_string());

        parts.join(" ")
    }

    fn quote_body(&self, json: &str) -> String {
        match self.body_quoting {
            BodyQuoting::Naive => format!("'{}'", json),
            BodyQuoting::Escaped => format!("'{}'", json.replace('\'', "'\"'\"'")),
        }
    }
}

/// Generate a grpcurl command with default settings
pub fn generate_grpcurl_command(request: &Request, server: &Server, imports: &[String]) -> String {
    CommandBuilder::new().build(request, server, imports)
}

/// Format a grpcurl command with syntax highlighting for terminal
///
/// Only inserts ANSI escapes; stripping them yields `cmd` unchanged.
pub fn format_grpcurl_pretty(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() * 2);

    let (rest, mut prev) = match cmd.strip_prefix(PROGRAM) {
        Some(rest) => {
            result.push_str(BOLD_YELLOW);
            result.push_str(PROGRAM);
            result.push_str(RESET);
            (rest, PROGRAM.chars().last())
        }
        None => (cmd, None),
    };

    let mut quote: Option<char> = None;
    let mut chars = rest.chars().peekable();

    while let Some(c) = chars.next() {
        let mut last = c;
        match quote {
            Some(q) if c == q => {
                result.push(c);
                result.push_str(RESET);
                quote = None;
            }
            Some(_) => result.push(c),
            None if c == '\'' || c == '"' => {
                result.push_str(GREEN);
                result.push(c);
                quote = Some(c);
            }
            None if c == '-' && prev.map_or(true, |p| p == ' ') => {
                result.push_str(CYAN);
                result.push(c);
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '-' {
                        result.push(next);
                        last = next;
                        chars.next();
                    } else {
                        break;
                    }
                }
                result.push_str(RESET);
            }
            None => result.push(c),
        }
        prev = Some(last);
    }

    if quote.is_some() {
        result.push_str(RESET);
    }

    result
}
