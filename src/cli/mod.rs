//! CLI argument parsing and processing

pub mod args;
pub mod process;

pub use args::Args;
pub use process::{process_args, ProcessedArgs};
