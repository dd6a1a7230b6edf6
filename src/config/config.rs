//! Config file handling
//!
//! ```toml
//! [defaults]
//! imports = ["/usr/local/include", "./proto"]
//! escape_body = false
//! pretty = true
//!
//! [servers.staging]
//! address = "staging.example.com:443"
//! use_tls = true
//! root_certs = "/etc/certs/ca.pem"
//! metadata = { x-tenant = "acme" }   # or a JSON object string
//! ```

use indexmap::IndexMap;
use std::path::PathBuf;
use tracing::debug;

use crate::errors::{GrpcopyError, Result};
use crate::grpc::metadata::check_binary_value;
use crate::grpc::MergeStrategy;
use crate::models::{Certificate, Metadata, Server};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "GRPCOPY_CONFIG_DIR";

/// A named server entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerProfile {
    pub address: String,
    pub use_tls: bool,
    pub root_certs: Option<String>,
    pub private_key: Option<String>,
    pub cert_chain: Option<String>,
    /// Metadata sent with every request to this server; request metadata wins
    pub metadata: Metadata,
}

impl ServerProfile {
    pub fn to_server(&self) -> Server {
        Server {
            address: self.address.clone(),
            use_tls: self.use_tls,
            certificate: Certificate {
                root_certs: self.root_certs.clone(),
                private_key: self.private_key.clone(),
                cert_chain: self.cert_chain.clone(),
            },
        }
    }
}

/// grpcopy configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Import paths used when none are given on the command line
    pub default_imports: Vec<String>,
    pub escape_body: bool,
    /// `None` means colour only when stdout is a terminal
    pub pretty: Option<bool>,
    pub servers: IndexMap<String, ServerProfile>,
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load() -> Result<Self> {
        let config_file = Self::default_config_dir().join("config.toml");

        if !config_file.exists() {
            debug!(path = %config_file.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| GrpcopyError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        debug!(
            path = %config_file.display(),
            servers = config.servers.len(),
            imports = config.default_imports.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let toml_value: toml::Value = toml::from_str(content)?;

        let defaults = toml_value.get("defaults");

        let default_imports = match defaults.and_then(|d| d.get("imports")) {
            Some(value) => string_array(value, "defaults.imports")?,
            None => Vec::new(),
        };

        let escape_body = optional_bool(defaults, "escape_body", "defaults.escape_body")?.unwrap_or(false);
        let pretty = optional_bool(defaults, "pretty", "defaults.pretty")?;

        let servers = Self::parse_servers(&toml_value)?;

        Ok(Self {
            default_imports,
            escape_body,
            pretty,
            servers,
        })
    }

    /// Parse `[servers.<name>]` tables
    fn parse_servers(toml: &toml::Value) -> Result<IndexMap<String, ServerProfile>> {
        let mut servers = IndexMap::new();

        let table = match toml.get("servers") {
            Some(section) => section
                .as_table()
                .ok_or_else(|| GrpcopyError::Config("servers must be a table".to_string()))?,
            None => return Ok(servers),
        };

        for (name, entry) in table {
            let address = entry
                .get("address")
                .ok_or_else(|| GrpcopyError::Config(format!("server '{}' is missing an address", name)))?
                .as_str()
                .ok_or_else(|| GrpcopyError::Config(format!("server '{}' address must be a string", name)))?;

            let label = |key: &str| format!("server '{}' {}", name, key);
            let use_tls = optional_bool(Some(entry), "use_tls", &label("use_tls"))?.unwrap_or(false);
            let path = |key: &str| optional_string(entry, key, &label(key));

            let metadata = match entry.get("metadata") {
                Some(value) => parse_shared_metadata(name, value)?,
                None => Metadata::new(),
            };

            servers.insert(
                name.clone(),
                ServerProfile {
                    address: address.to_string(),
                    use_tls,
                    root_certs: path("root_certs")?,
                    private_key: path("private_key")?,
                    cert_chain: path("cert_chain")?,
                    metadata,
                },
            );
        }

        Ok(servers)
    }

    /// Look up a server profile by name
    pub fn server(&self, name: &str) -> Result<&ServerProfile> {
        self.servers.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.servers.keys().map(String::as_str).collect();
            if known.is_empty() {
                GrpcopyError::Config(format!("unknown server '{}' (no servers configured)", name))
            } else {
                GrpcopyError::Config(format!("unknown server '{}' (known: {})", name, known.join(", ")))
            }
        })
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("grpcopy"))
            .unwrap_or_else(|| PathBuf::from(".grpcopy"))
    }
}

fn optional_bool(table: Option<&toml::Value>, key: &str, label: &str) -> Result<Option<bool>> {
    match table.and_then(|t| t.get(key)) {
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| GrpcopyError::Config(format!("{} must be a boolean", label))),
        None => Ok(None),
    }
}

fn optional_string(table: &toml::Value, key: &str, label: &str) -> Result<Option<String>> {
    match table.get(key) {
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| GrpcopyError::Config(format!("{} must be a string", label))),
        None => Ok(None),
    }
}

/// Shared metadata: a JSON object string or a table of strings
fn parse_shared_metadata(server: &str, value: &toml::Value) -> Result<Metadata> {
    let invalid = |e: GrpcopyError| GrpcopyError::Config(format!("server '{}' metadata: {}", server, e));
    let mut metadata = Metadata::new();

    match value {
        toml::Value::String(json) => {
            metadata.parse_json(json, MergeStrategy::Preserve).map_err(invalid)?;
        }
        toml::Value::Table(table) => {
            for (key, value) in table {
                let value = value.as_str().ok_or_else(|| {
                    GrpcopyError::Config(format!("server '{}' metadata '{}' must be a string", server, key))
                })?;
                check_binary_value(key, value).map_err(invalid)?;
                metadata.insert_if_absent(key.as_str(), value);
            }
        }
        _ => {
            return Err(GrpcopyError::Config(format!(
                "server '{}' metadata must be a JSON object string or a table of strings",
                server
            )))
        }
    }

    Ok(metadata)
}

fn string_array(value: &toml::Value, key: &str) -> Result<Vec<String>> {
    let invalid = || GrpcopyError::Config(format!("{} must be an array of strings", key));
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(String::from).ok_or_else(invalid))
        .collect()
}
