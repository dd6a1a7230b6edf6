//! Developer Experience features
//!
//! - **grpcurl Generation**: Convert a request description to the equivalent
//!   `grpcurl` command line
//!
//! ```bash
//! grpcopy --proto protos/greet.proto --method /greet.Greeter/SayHello \
//!     --address localhost:50051 -d '{"name":"world"}'
//!
//! # Output:
//! # grpcurl -d '{"name":"world"}' -import-path "protos" -proto "protos/greet.proto" -plaintext localhost:50051 greet.Greeter/SayHello
//! ```

pub mod grpcurl;

pub use grpcurl::{format_grpcurl_pretty, generate_grpcurl_command, BodyQuoting, CommandBuilder, PROGRAM};
