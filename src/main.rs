use grpcopy::context::Environment;
use grpcopy::core;
use grpcopy::status::ExitStatus;

/// Entry point - returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    core::run(args, env)
}
