use clap::Parser;
use tracing::{debug, warn};

use crate::cli::{process_args, Args};
use crate::config::Config;
use crate::context::Environment;
use crate::devexp::{format_grpcurl_pretty, CommandBuilder};
use crate::logging;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Parses arguments, loads the config file, builds the grpcurl command and
/// prints it to stdout.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    logging::init(parsed.debug);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Config::default()
        }
    };

    let processed = match process_args(&parsed, &config) {
        Ok(processed) => processed,
        Err(e) => {
            eprintln!("{}: error: {}", env.program_name, e);
            return ExitStatus::Error;
        }
    };

    let command = CommandBuilder::new()
        .body_quoting(processed.body_quoting)
        .build(&processed.request, &processed.server, &processed.imports);

    debug!(
        metadata = processed.request.metadata.len(),
        imports = processed.imports.len(),
        tls = processed.server.use_tls,
        "Generated grpcurl command"
    );

    if processed.pretty.unwrap_or_else(|| env.use_colors()) {
        println!("{}", format_grpcurl_pretty(&command));
    } else {
        println!("{}", command);
    }

    ExitStatus::Success
}
