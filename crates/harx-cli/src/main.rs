use harx_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match Cli::run_from_args() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("harx error: {:#}", err);
            std::process::exit(1);
        }
    }
}
