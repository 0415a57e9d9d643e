use urldefault_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        match logging::init_logging_stderr() {
            Ok(()) => tracing::warn!("file logging unavailable, using stderr: {:#}", err),
            Err(e) => eprintln!("urldefault: logging disabled: {:#}", e),
        }
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("urldefault error: {:#}", err);
        std::process::exit(1);
    }
}
