//! CLI command handlers.

mod extract;
mod usage;

pub use extract::run_extract;
pub use usage::print_usage;
